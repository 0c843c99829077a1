//! Slot substitution engine.
//!
//! Templates use `{slot}` placeholders:
//!
//! - `{name}` - Substitutes the value of slot `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined slots are an error rather than an empty substitution, and
//! [`slots`] lets callers validate a template against their parameters
//! before rendering anything.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A slot was referenced but no value was provided.
    #[error("undefined slot '{name}' at position {position}")]
    UndefinedSlot {
        /// The name of the undefined slot.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position}")]
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// A slot with no name (e.g., `{}` or `{  }`).
    #[error("empty slot name '{{}}' at position {position}")]
    EmptySlotName {
        /// Byte offset of the opening `{`.
        position: usize,
    },
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Slot { name: &'a str, position: usize },
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '{' && ch != '}' {
            continue;
        }

        if text_start < pos {
            segments.push(Segment::Text(&template[text_start..pos]));
        }

        if ch == '}' {
            // `}}` and a lone `}` both render a single brace
            if let Some((_, '}')) = chars.peek() {
                chars.next();
                text_start = pos + 2;
            } else {
                text_start = pos + 1;
            }
            segments.push(Segment::Text("}"));
            continue;
        }

        if let Some((_, '{')) = chars.peek() {
            chars.next();
            segments.push(Segment::Text("{"));
            text_start = pos + 2;
            continue;
        }

        let end = chars
            .by_ref()
            .find(|&(_, c)| c == '}')
            .map(|(i, _)| i)
            .ok_or(TemplateError::UnmatchedBrace { position: pos })?;

        let name = template[pos + 1..end].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptySlotName { position: pos });
        }

        segments.push(Segment::Slot {
            name,
            position: pos,
        });
        text_start = end + 1;
    }

    if text_start < template.len() {
        segments.push(Segment::Text(&template[text_start..]));
    }

    Ok(segments)
}

/// List the slot names referenced by a template, in order of first
/// appearance and without duplicates.
///
/// Fails if the template is malformed.
pub fn slots(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Slot { name, .. } = segment {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Render a template string by substituting slots.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tfprompt::prompt::render_template;
///
/// let mut vars = HashMap::new();
/// vars.insert("resource_name".to_string(), "aws_batch_job_queue".to_string());
///
/// let result = render_template("resource \"{resource_name}\" {{}}", &vars).unwrap();
/// assert_eq!(result, "resource \"aws_batch_job_queue\" {}");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => result.push_str(text),
            Segment::Slot { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedSlot {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("resource_name", "aws_s3_bucket"), ("verb", "Document")]);
        let result = render_template("{verb} {resource_name}.", &vars).unwrap();
        assert_eq!(result, "Document aws_s3_bucket.");
    }

    #[test]
    fn test_no_slots() {
        let result = render_template("Just plain text", &HashMap::new()).unwrap();
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render_template("", &HashMap::new()).unwrap(), "");
        assert!(slots("").unwrap().is_empty());
    }

    #[test]
    fn test_escaped_hcl_block() {
        let template = "resource \"aws_vpc\" \"main\" {{\n  cidr_block = \"10.0.0.0/16\"\n}}";
        let result = render_template(template, &HashMap::new()).unwrap();
        assert_eq!(
            result,
            "resource \"aws_vpc\" \"main\" {\n  cidr_block = \"10.0.0.0/16\"\n}"
        );
    }

    #[test]
    fn test_mixed_escapes_and_slots() {
        let vars = vars([("x", "value")]);
        let result = render_template("{{escaped}} and {x}", &vars).unwrap();
        assert_eq!(result, "{escaped} and value");
    }

    #[test]
    fn test_lone_closing_brace() {
        let result = render_template("a } b", &HashMap::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_undefined_slot_error() {
        let err = render_template("Hello {name}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedSlot {
                name: "name".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = slots("Hello {name").unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 6 });
    }

    #[test]
    fn test_empty_slot_name_error() {
        assert_eq!(
            slots("Hello {}").unwrap_err(),
            TemplateError::EmptySlotName { position: 6 }
        );
        assert_eq!(
            slots("Hello {   }").unwrap_err(),
            TemplateError::EmptySlotName { position: 6 }
        );
    }

    #[test]
    fn test_whitespace_in_slot_name() {
        let vars = vars([("name", "Alice")]);
        assert_eq!(render_template("Hello { name }!", &vars).unwrap(), "Hello Alice!");
        assert_eq!(slots("Hello { name }!").unwrap(), vec!["name"]);
    }

    #[test]
    fn test_slots_in_order_without_duplicates() {
        let template = "{b} then {a} then {b} and {{c}}";
        assert_eq!(slots(template).unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_multiple_occurrences() {
        let vars = vars([("x", "X")]);
        assert_eq!(render_template("{x}-{x}-{x}", &vars).unwrap(), "X-X-X");
    }

    #[test]
    fn test_adjacent_slots() {
        let vars = vars([("a", "A"), ("b", "B")]);
        assert_eq!(render_template("{a}{b}", &vars).unwrap(), "AB");
    }

    #[test]
    fn test_braces_in_value_are_not_reparsed() {
        let vars = vars([("code", "{resource_name}")]);
        let result = render_template("Code: {code}", &vars).unwrap();
        assert_eq!(result, "Code: {resource_name}");
    }

    #[test]
    fn test_unicode_around_slots() {
        let vars = vars([("text", "日本語")]);
        let result = render_template("→ {text} ←", &vars).unwrap();
        assert_eq!(result, "→ 日本語 ←");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UndefinedSlot {
            name: "foo".to_string(),
            position: 10,
        };
        assert_eq!(err.to_string(), "undefined slot 'foo' at position 10");

        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5");

        let err = TemplateError::EmptySlotName { position: 3 };
        assert_eq!(err.to_string(), "empty slot name '{}' at position 3");
    }
}
