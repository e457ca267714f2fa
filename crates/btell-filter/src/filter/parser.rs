//! Builds a [`StoryFilter`] from filter tokens.

use super::error::{BuildError, FilterResult};
use super::lexer::{tokenize, FilterToken};
use super::query::{FilterField, StoryFilter, COMPLETED_PREDICATE, PREDICATE_FIELD};

/// Parses an optional filter string into a [`StoryFilter`].
///
/// `None` and the empty string produce the default filter, which matches
/// every story, without tokenizing anything.
///
/// # Errors
///
/// Returns `FilterError::UnterminatedLiteral` if a quote is left open. Every
/// other problem is reported through [`StoryFilter::error`].
///
/// # Example
///
/// ```
/// use btell_filter::filter::prepare_stories_query;
///
/// let filter = prepare_stories_query(Some("is:completed \"lost city\"")).unwrap();
/// assert_eq!(filter.completed, Some(true));
/// assert_eq!(filter.freeform, vec!["lost city".to_string()]);
///
/// let filter = prepare_stories_query(Some("rating:5")).unwrap();
/// assert_eq!(filter.error_message().as_deref(), Some("Unknown field name: rating"));
/// ```
pub fn prepare_stories_query(input: Option<&str>) -> FilterResult<StoryFilter> {
    let input = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(StoryFilter::default()),
    };

    let tokens = tokenize(input)?;
    Ok(build(&tokens))
}

/// Builds a filter from a token sequence.
///
/// Tokens are consumed left to right. A literal is added to the free text
/// terms. A field always consumes the token after it as its value, even when
/// that token is itself a field; that case is reported as
/// [`BuildError::FieldAsValue`], so `author:someone:field` is an error rather
/// than a reinterpretation of `someone` as a field.
///
/// Building stops at the first error, which is stored on the returned filter
/// together with whatever was collected before it.
pub fn build(tokens: &[FilterToken]) -> StoryFilter {
    let mut filter = StoryFilter::default();
    let mut position = 0;

    while position < tokens.len() {
        match &tokens[position] {
            FilterToken::Field(name) => {
                let Some(value) = tokens.get(position + 1) else {
                    return fail(filter, BuildError::field_without_value(name));
                };
                if let Err(error) = add_field(&mut filter, name, value) {
                    return fail(filter, error);
                }
                position += 2;
            }
            FilterToken::Literal(text) => {
                filter.freeform.push(text.clone());
                position += 1;
            }
        }
    }

    filter
}

/// Applies `name:value` to the filter.
fn add_field(filter: &mut StoryFilter, name: &str, value: &FilterToken) -> Result<(), BuildError> {
    let value = match value {
        FilterToken::Literal(text) => text.as_str(),
        FilterToken::Field(other) => return Err(BuildError::field_as_value(name, other.as_str())),
    };

    if name == PREDICATE_FIELD {
        if value == COMPLETED_PREDICATE {
            filter.completed = Some(true);
            return Ok(());
        }
        return Err(BuildError::unknown_predicate(value));
    }

    let field = FilterField::from_name(name).ok_or_else(|| BuildError::unknown_field(name))?;
    filter.assign(field, value);
    Ok(())
}

fn fail(mut filter: StoryFilter, error: BuildError) -> StoryFilter {
    tracing::debug!(%error, "story filter rejected");
    filter.error = Some(error);
    filter
}
