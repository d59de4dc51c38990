//! Typed storefront locations.

use catalog_host::WorkId;
use leptos_router::ParamsMap;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every screen the router can show.
pub enum AppRoute {
    /// `/`
    Home,
    /// `/account`
    Account,
    /// `/book-detail?id={id}`; `id` is `None` when absent or blank.
    WorkDetail { id: Option<WorkId> },
    /// `/digital-reader?id={id}`
    Reader { id: Option<WorkId> },
    /// `/library`
    Library,
    /// Any other path.
    NotFound { path: String },
}

impl AppRoute {
    /// Resolves a pathname and raw query string (with or without the leading `?`).
    pub fn resolve(path: &str, query: &str) -> Self {
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match normalized {
            "/" => Self::Home,
            "/account" => Self::Account,
            "/book-detail" => Self::WorkDetail {
                id: query_work_id(query),
            },
            "/digital-reader" => Self::Reader {
                id: query_work_id(query),
            },
            "/library" => Self::Library,
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Link target for this route.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Account => "/account".to_string(),
            Self::WorkDetail { id } => with_id("/book-detail", id.as_ref()),
            Self::Reader { id } => with_id("/digital-reader", id.as_ref()),
            Self::Library => "/library".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Detail page link for one work.
    pub fn work_detail(id: &WorkId) -> Self {
        Self::WorkDetail {
            id: Some(id.clone()),
        }
    }

    /// Reader link for one work.
    pub fn reader(id: &WorkId) -> Self {
        Self::Reader {
            id: Some(id.clone()),
        }
    }
}

fn with_id(base: &str, id: Option<&WorkId>) -> String {
    match id {
        Some(id) => format!("{base}?id={}", urlencoding::encode(id.as_str())),
        None => base.to_string(),
    }
}

fn non_blank_id(value: &str) -> Option<WorkId> {
    (!value.trim().is_empty()).then(|| WorkId::new(value))
}

/// Parses the `id` parameter out of a raw query string; blank values count as missing.
pub fn query_work_id(query: &str) -> Option<WorkId> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "id")
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            non_blank_id(&String::from_utf8_lossy(&urlencoding::decode_binary(
                value.as_bytes(),
            )))
        })
}

/// Reads `id` from the router's decoded query map; blank values count as missing.
pub fn work_id_param(params: &ParamsMap) -> Option<WorkId> {
    params.get("id").and_then(|value| non_blank_id(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(AppRoute::resolve("/", ""), AppRoute::Home);
        assert_eq!(AppRoute::resolve("", ""), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/account", ""), AppRoute::Account);
        assert_eq!(AppRoute::resolve("/library/", ""), AppRoute::Library);
        assert_eq!(
            AppRoute::resolve("/book-detail", "?id=a-tale-of-two-cities"),
            AppRoute::WorkDetail {
                id: Some(WorkId::from("a-tale-of-two-cities"))
            }
        );
        assert_eq!(
            AppRoute::resolve("/digital-reader", "id=6&from=library"),
            AppRoute::Reader {
                id: Some(WorkId::from("6"))
            }
        );
    }

    #[test]
    fn unknown_route_resolves_to_not_found() {
        assert_eq!(
            AppRoute::resolve("/about", ""),
            AppRoute::NotFound {
                path: "/about".to_string()
            }
        );
        assert_eq!(
            AppRoute::resolve("/library/extra", "id=1"),
            AppRoute::NotFound {
                path: "/library/extra".to_string()
            }
        );
    }

    #[test]
    fn missing_or_blank_id_is_none() {
        assert_eq!(
            AppRoute::resolve("/book-detail", ""),
            AppRoute::WorkDetail { id: None }
        );
        assert_eq!(
            AppRoute::resolve("/book-detail", "?id="),
            AppRoute::WorkDetail { id: None }
        );
        assert_eq!(
            AppRoute::resolve("/digital-reader", "?id"),
            AppRoute::Reader { id: None }
        );
    }

    #[test]
    fn hrefs_carry_encoded_ids() {
        assert_eq!(AppRoute::work_detail(&WorkId::from("1")).href(), "/book-detail?id=1");
        assert_eq!(
            AppRoute::reader(&WorkId::from("moby dick")).href(),
            "/digital-reader?id=moby%20dick"
        );
        assert_eq!(
            query_work_id("id=moby%20dick"),
            Some(WorkId::from("moby dick"))
        );
        assert_eq!(
            query_work_id("id=the+old%20man"),
            Some(WorkId::from("the old man"))
        );
        assert_eq!(AppRoute::Library.href(), "/library");
    }

    #[test]
    fn router_params_yield_the_work_id() {
        let mut params = ParamsMap::new();
        assert_eq!(work_id_param(&params), None);

        params.insert("id".to_string(), "  ".to_string());
        assert_eq!(work_id_param(&params), None);

        params.insert("id".to_string(), "moby dick".to_string());
        assert_eq!(work_id_param(&params), Some(WorkId::from("moby dick")));
    }
}
