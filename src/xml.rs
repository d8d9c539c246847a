//! 키/값을 요소로 바꾸는 XML 인코딩
//!
//! 객체는 타입이 없는 `root` 요소로 감싸고, 그 아래의 요소마다 `type` 속성
//! (`dict`, `list`, `str`, `int`, `float`, `bool`, `null`)을 붙인다.
//! 리스트의 원소는 `<item>` 요소가 된다.
//! XML 이름으로 쓸 수 없는 키는 `<key name="...">`으로 쓴다.
//! 객체가 아닌 값은 `<root type="list">`처럼 `root`에 타입을 붙인다.
//!
//! ```text
//! <root><root type="dict"><item1 type="str">value1</item1>...</root></root>
//! ```
//!
//! `from_xml`은 `type` 속성을 이용해서 원래의 값을 복원한다.

use std::io::Cursor;

use quick_xml::{
    events::{attributes::AttrError, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};
use serde_json::{Map, Number, Value};

const ROOT: &str = "root";
const LIST_ITEM: &str = "item";
const INVALID_KEY: &str = "key";

#[derive(thiserror::Error, Debug)]
pub enum XmlError {
    #[error("Failed to convert the value")]
    Serialize(#[from] serde_json::Error),

    #[error("XML Error")]
    Xml(#[from] quick_xml::Error),

    #[error("XML Attribute Error")]
    Attribute(#[from] AttrError),

    #[error("IO Error")]
    IOError(#[from] std::io::Error),

    #[error("UTF-8 Error")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Malformed XML document: {0}")]
    Malformed(String),
}

/// 직렬화 가능한 값을 XML 문자열로 변환한다.
pub fn to_xml<T: serde::Serialize>(value: &T) -> Result<String, XmlError> {
    let value = serde_json::to_value(value)?;

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    match &value {
        Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
            for (key, value) in map {
                write_element(&mut writer, key, value)?;
            }
            writer.write_event(Event::End(BytesEnd::new(ROOT)))?;
        }
        other => write_element(&mut writer, ROOT, other)?,
    }

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    key: &str,
    value: &Value,
) -> Result<(), XmlError> {
    let (name, start) = if is_valid_name(key) {
        (key, BytesStart::new(key))
    } else {
        (
            INVALID_KEY,
            BytesStart::new(INVALID_KEY).with_attributes([("name", key)]),
        )
    };
    let start = start.with_attributes([("type", type_name(value))]);

    writer.write_event(Event::Start(start))?;
    match value {
        Value::Null => {}
        Value::Bool(b) => writer.write_event(Event::Text(BytesText::new(&b.to_string())))?,
        Value::Number(n) => writer.write_event(Event::Text(BytesText::new(&n.to_string())))?,
        Value::String(s) => writer.write_event(Event::Text(BytesText::new(s)))?,
        Value::Array(items) => {
            for item in items {
                write_element(writer, LIST_ITEM, item)?;
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                write_element(writer, key, value)?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;

    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

// 태그 이름으로 쓸 수 있는지 확인한다.
fn is_valid_name(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.to_lowercase().starts_with("xml")
}

/// `to_xml`이 만든 문서를 값으로 되돌린다.
/// 타입이 없는 최상위 요소는 객체로 읽는다.
pub fn from_xml(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let (_, kind) = describe(&start)?;
                return read_value(&mut reader, kind.as_deref().unwrap_or("dict"));
            }
            Event::Empty(start) => {
                let (_, kind) = describe(&start)?;
                return empty_value(kind.as_deref().unwrap_or("dict"));
            }
            Event::Eof => return Err(XmlError::Malformed("no root element".into())),
            // 선언, 주석, 공백은 무시한다.
            _ => {}
        }
    }
}

fn read_value(reader: &mut Reader<&[u8]>, kind: &str) -> Result<Value, XmlError> {
    match kind {
        "dict" => {
            let mut map = Map::new();
            loop {
                match reader.read_event()? {
                    Event::Start(start) => {
                        let (key, kind) = describe(&start)?;
                        let value = read_value(reader, kind.as_deref().unwrap_or("str"))?;
                        map.insert(key, value);
                    }
                    Event::Empty(start) => {
                        let (key, kind) = describe(&start)?;
                        map.insert(key, empty_value(kind.as_deref().unwrap_or("str"))?);
                    }
                    Event::End(_) => return Ok(Value::Object(map)),
                    Event::Eof => return Err(XmlError::Malformed("unclosed dict".into())),
                    _ => {}
                }
            }
        }
        "list" => {
            let mut items = Vec::new();
            loop {
                match reader.read_event()? {
                    Event::Start(start) => {
                        let (_, kind) = describe(&start)?;
                        items.push(read_value(reader, kind.as_deref().unwrap_or("str"))?);
                    }
                    Event::Empty(start) => {
                        let (_, kind) = describe(&start)?;
                        items.push(empty_value(kind.as_deref().unwrap_or("str"))?);
                    }
                    Event::End(_) => return Ok(Value::Array(items)),
                    Event::Eof => return Err(XmlError::Malformed("unclosed list".into())),
                    _ => {}
                }
            }
        }
        scalar => {
            let mut text = String::new();
            loop {
                match reader.read_event()? {
                    Event::Text(t) => text.push_str(&t.unescape()?),
                    Event::End(_) => return scalar_value(scalar, &text),
                    Event::Start(_) | Event::Empty(_) => {
                        return Err(XmlError::Malformed(format!(
                            "`{}` element contains child elements",
                            scalar
                        )))
                    }
                    Event::Eof => return Err(XmlError::Malformed("unclosed element".into())),
                    _ => {}
                }
            }
        }
    }
}

// 요소의 키와 `type` 속성을 꺼낸다.
fn describe(start: &BytesStart<'_>) -> Result<(String, Option<String>), XmlError> {
    let mut key = String::from_utf8(start.name().as_ref().to_vec())?;
    if key == INVALID_KEY {
        if let Some(name) = start.try_get_attribute("name")? {
            key = name.unescape_value()?.into_owned();
        }
    }
    let kind = match start.try_get_attribute("type")? {
        Some(attribute) => Some(attribute.unescape_value()?.into_owned()),
        None => None,
    };
    Ok((key, kind))
}

fn empty_value(kind: &str) -> Result<Value, XmlError> {
    match kind {
        "dict" => Ok(Value::Object(Map::new())),
        "list" => Ok(Value::Array(Vec::new())),
        scalar => scalar_value(scalar, ""),
    }
}

fn scalar_value(kind: &str, text: &str) -> Result<Value, XmlError> {
    let malformed = || XmlError::Malformed(format!("`{}` is not a valid {}", text, kind));
    match kind {
        "str" => Ok(Value::String(text.to_owned())),
        "int" => text
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| malformed()),
        "float" => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(malformed),
        "bool" => match text {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(malformed()),
        },
        "null" => Ok(Value::Null),
        other => Err(XmlError::Malformed(format!("unknown type `{}`", other))),
    }
}
