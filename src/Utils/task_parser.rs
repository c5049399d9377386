/// parse plot task documents with structure like
/// " polynomial expression: x^2-2x+3 sampling method: adaptive domain: -10, 10 "
/// which have section titles and pairs key - list of values. Values are typed on the fly
/// (integer, float, boolean, otherwise string). Sections and keys that the caller expects but the
/// document lacks can be added as `None` through a template.
///
/// Expressions must be written without spaces: a space ends a value.
use crate::polynomial::poly_error::PolyError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

pub type DocumentMap = HashMap<String, SectionMap>;
pub type SectionMap = HashMap<String, Option<Vec<Value>>>;

/// value of a key in a plot task document
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// numbers written as "10" come in as Integer, so both variants count as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(f) => f.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_value())
    }
}

/// identifier: letter or underscore, then letters, digits, underscores
fn parse_identifier(input: &str) -> IResult<&str, String> {
    let mut parser = map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        String::from,
    );
    parser.parse(input)
}

/// section title, trailing whitespace and newlines are dropped
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, title) = parse_identifier(input)?;
    Ok((input.trim_start(), title))
}

pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    parse_identifier(input)
}

/// one value, stops at a comma, whitespace, newline or semicolon
pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    let mut parser = map(
        take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';')),
        |s: &str| {
            if let Ok(val) = s.parse::<i64>() {
                Value::Integer(val)
            } else if let Ok(val) = s.parse::<f64>() {
                Value::Float(val)
            } else if let Ok(val) = s.parse::<bool>() {
                Value::Boolean(val)
            } else {
                Value::String(s.to_string())
            }
        },
    );
    parser.parse(input)
}

/// comma separated values
pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = space0(input)?;
    let separator_coma = delimited(space0, tag(","), space0);
    let mut parser = separated_list0(separator_coma, parse_value);
    parser.parse(input)
}

/// "key: value1, value2"
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim_start(), result))
}

/// title followed by one or more key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, HashMap<String, Vec<Value>>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, multispace0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// drops comment lines (starting with //, #, %, or ;) and blank lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the whole document into a map title -> (key -> values)
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;
    let document = sections
        .into_iter()
        .map(|(title, section)| {
            let section: SectionMap = section
                .into_iter()
                .map(|(key, values)| (key, Some(values)))
                .collect();
            (title, section)
        })
        .collect();
    Ok((input, document))
}

/// Parses a document (comments allowed), then makes sure every title and key of the template
/// exists in the result, missing keys become None
pub fn parse_document_as(input: &str, template: Option<&DocumentMap>) -> Result<DocumentMap, PolyError> {
    let filtered = filter_comments(input);
    let (remaining, mut parsed) = parse_document(&filtered)
        .map_err(|e| PolyError::Config(format!("parsing error: {:?}", e)))?;
    if !remaining.trim().is_empty() {
        return Err(PolyError::Config(format!(
            "failed to parse entire document, remaining: '{}'",
            remaining.trim()
        )));
    }
    if let Some(template) = template {
        for (title, keys) in template {
            let section = parsed.entry(title.clone()).or_default();
            for key in keys.keys() {
                section.entry(key.clone()).or_insert(None);
            }
        }
    }
    Ok(parsed)
}

/// read and parse a plot task file
pub fn parse_document_from_file<P: AsRef<Path>>(
    path: P,
    template: Option<&DocumentMap>,
) -> Result<DocumentMap, PolyError> {
    let content = std::fs::read_to_string(path)?;
    parse_document_as(&content, template)
}
