use crate::FieldCatalog;
use crate::OracleSuggestion;
use crate::TokenAtCursor;

/// Completes the field selector the parser stopped on.
///
/// - An unknown top-level name (`na`) is completed with every field name,
///   each labeled with the typed image so that only names containing it
///   survive suggestion mapping.
/// - A complete name that has sub-attributes or is a map (`assignedds`)
///   gets a `.` appended.
/// - An incomplete dotted path (`assignedds.ve`) is completed with the
///   field's sub-attributes.
///
/// Returns `None` when the token is already a complete selector, leaving
/// the grammar's own suggestions in place.
pub fn field_name_suggestions(
    token: &TokenAtCursor,
    fields: &FieldCatalog,
) -> Option<Vec<OracleSuggestion>> {
    let image = token.image.as_str();
    match image.split_once('.') {
        None if fields.has_sub_attributes(image) || fields.is_map(image) => {
            Some(vec![OracleSuggestion::new(token.end, token.end, ".")])
        },
        None if fields.contains_path(image) => None,
        None => Some(
            fields
                .names()
                .map(|name| OracleSuggestion::labeled(token.begin, token.end, image, name))
                .collect(),
        ),
        Some(_) if fields.contains_path(image) => None,
        Some((top, typed_sub)) => {
            let field = fields.get(top)?;
            if field.is_map() {
                // Any key is valid after a map field.
                return None;
            }
            let sub_start = token.begin + top.chars().count() + 1;
            Some(
                field
                    .sub_attributes()
                    .iter()
                    .map(|attribute| {
                        if typed_sub.is_empty() {
                            OracleSuggestion::new(sub_start, token.end, attribute.as_str())
                        } else {
                            OracleSuggestion::labeled(sub_start, token.end, typed_sub, attribute.as_str())
                        }
                    })
                    .collect(),
            )
        },
    }
}
