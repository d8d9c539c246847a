/// JSON과 XML로 직렬화해서 돌려주는 고정 데이터
#[derive(Debug, serde::Serialize)]
pub struct Fixture {
    pub root: FixtureRoot,
}

#[derive(Debug, serde::Serialize)]
pub struct FixtureRoot {
    pub item1: &'static str,
    pub item2: Subitems,
    pub item3: [&'static str; 2],
}

#[derive(Debug, serde::Serialize)]
pub struct Subitems {
    pub subitem1: &'static str,
    pub subitem2: &'static str,
}

// 읽기만 하므로 잠금 없이 공유한다.
pub const FIXTURE: Fixture = Fixture {
    root: FixtureRoot {
        item1: "value1",
        item2: Subitems {
            subitem1: "subvalue1",
            subitem2: "subvalue2",
        },
        item3: ["list_item1", "list_item2"],
    },
};
