use axum::Json;

use crate::{
    domain::{Greeting, HelloRequest},
    extract::ValidatedJson,
};

// `curl -X POST -H 'Content-Type: application/json' -d '{"name": "Alice", "age": 30}' http://127.0.0.1:8000/hello`
// => 200 OK {"message":"Alice, ваш возраст - 30"}
// `name`이 3글자 미만이거나 `age`가 범위를 벗어나면 핸들러에 오기 전에 422
#[tracing::instrument(
    name = "Greeting a user.",
    skip_all,
    fields(name = %request.name, age = %request.age)
)]
pub async fn hello(ValidatedJson(request): ValidatedJson<HelloRequest>) -> Json<Greeting> {
    let greeting = Greeting::from(&request);
    tracing::info!("Greeting is ready.");
    Json(greeting)
}
