use crate::server::error::AppError;

/// Parses a comma separated list of ids such as `"3,5,8"`.
///
/// Whitespace around each id is ignored and empty segments are skipped, so `"3, 5,"` yields
/// `[3, 5]`.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed ids in input order
/// - `Err(AppError::BadRequest)` - A segment is not a valid id
pub fn parse_id_list(value: &str) -> Result<Vec<i32>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid id", segment)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_ignoring_whitespace_and_empty_segments() {
        assert_eq!(parse_id_list("3, 5,,8 ,").unwrap(), vec![3, 5, 8]);
        assert!(parse_id_list("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_segment() {
        assert!(matches!(
            parse_id_list("1,two"),
            Err(AppError::BadRequest(_))
        ));
    }
}
