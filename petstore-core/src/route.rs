//! Address-bar paths and API endpoints

use crate::types::ViewState;

/// Number of records requested by the list view
pub const RANDOM_BATCH_SIZE: usize = 10;

/// Prefix of detail-view paths
const DETAIL_PREFIX: &str = "/pet/";

/// Parse an address-bar path into the view it denotes.
///
/// `/pet/{id}` (one non-empty segment, optional trailing slash) is a detail
/// view; anything else is the list. Query strings and fragments are ignored.
pub fn parse_path(path: &str) -> ViewState {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let Some(rest) = path.strip_prefix(DETAIL_PREFIX) else {
        return ViewState::List;
    };
    let segment = rest.strip_suffix('/').unwrap_or(rest);
    if segment.is_empty() || segment.contains('/') {
        return ViewState::List;
    }

    match urlencoding::decode(segment) {
        Ok(id) if !id.is_empty() => ViewState::detail(id.into_owned()),
        Ok(_) => ViewState::List,
        Err(e) => {
            log::warn!("Ignoring undecodable record id in path {path}: {e}");
            ViewState::List
        }
    }
}

/// Address-bar path of a record's detail view
pub fn detail_path(record_id: &str) -> String {
    format!("{DETAIL_PREFIX}{}", urlencoding::encode(record_id))
}

/// Address-bar path of a view
pub fn view_path(view: &ViewState) -> String {
    match view {
        ViewState::List => "/".to_string(),
        ViewState::Detail { record_id } => detail_path(record_id),
    }
}

/// API endpoint of the random batch
pub fn random_records_path() -> String {
    format!("/api/pets/random/{RANDOM_BATCH_SIZE}")
}

/// API endpoint of a single record
pub fn record_path(record_id: &str) -> String {
    format!("/api/pets/{}", urlencoding::encode(record_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_list() {
        assert_eq!(parse_path("/"), ViewState::List);
        assert_eq!(parse_path(""), ViewState::List);
    }

    #[test]
    fn detail_path_is_detail() {
        assert_eq!(parse_path("/pet/7"), ViewState::detail("7"));
        assert_eq!(parse_path("/pet/7/"), ViewState::detail("7"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(parse_path("/pet/7?tab=info"), ViewState::detail("7"));
        assert_eq!(parse_path("/pet/7#photos"), ViewState::detail("7"));
        assert_eq!(parse_path("/?page=2"), ViewState::List);
    }

    #[test]
    fn malformed_detail_paths_fall_back_to_list() {
        assert_eq!(parse_path("/pet/"), ViewState::List);
        assert_eq!(parse_path("/pet"), ViewState::List);
        assert_eq!(parse_path("/pet/7/photos"), ViewState::List);
        assert_eq!(parse_path("/pets/7"), ViewState::List);
        assert_eq!(parse_path("/about"), ViewState::List);
    }

    #[test]
    fn encoded_ids_round_trip() {
        let path = detail_path("a b");
        assert_eq!(path, "/pet/a%20b");
        assert_eq!(parse_path(&path), ViewState::detail("a b"));
    }

    #[test]
    fn view_paths() {
        assert_eq!(view_path(&ViewState::List), "/");
        assert_eq!(view_path(&ViewState::detail("10")), "/pet/10");
    }

    #[test]
    fn api_endpoints() {
        assert_eq!(random_records_path(), "/api/pets/random/10");
        assert_eq!(record_path("10"), "/api/pets/10");
        assert_eq!(record_path("1/2"), "/api/pets/1%2F2");
    }
}
