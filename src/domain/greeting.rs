use validator::Validate;

/// `POST /hello`의 JSON 본문
#[derive(Debug, serde::Deserialize, Validate)]
pub struct HelloRequest {
    #[validate(length(min = 3, max = 20))]
    pub name: String,
    #[validate(range(min = 18, exclusive_max = 111))]
    pub age: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Greeting {
    pub message: String,
}

impl From<&HelloRequest> for Greeting {
    fn from(request: &HelloRequest) -> Self {
        Self {
            message: format!("{}, ваш возраст - {}", request.name, request.age),
        }
    }
}
