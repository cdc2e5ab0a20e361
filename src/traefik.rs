use indexmap::IndexMap;

mod rule;

pub use rule::{build_rule, RouteMatch};

/// Indentation of a label entry below the `labels:` key of a compose service.
const LABEL_INDENT: &str = "      ";
const LABELS_HEADER: &str = "    labels:";

/// Everything needed to route one container through Traefik.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    pub(crate) namespace: String,
    pub(crate) network: String,
    pub(crate) rule: String,
    pub(crate) port: String,
    pub(crate) entrypoints: String,
    pub(crate) middlewares: String,  // comma-joined, empty for none
    pub(crate) service_name: String, // empty for implicit service discovery
}

/// Builds the label keys and values in the order they must be emitted.
///
/// The first five labels are always present. The service and middleware
/// labels only appear when their field is non-empty.
pub fn label_map(config: &LabelConfig) -> IndexMap<String, String> {
    let ns = &config.namespace;
    let mut labels = IndexMap::new();

    labels.insert("traefik.enable".to_string(), "true".to_string());
    labels.insert("traefik.docker.network".to_string(), config.network.clone());
    labels.insert(format!("traefik.http.routers.{}.rule", ns), config.rule.clone());
    labels.insert(
        format!("traefik.http.services.{}.loadbalancer.server.port", ns),
        config.port.clone(),
    );
    labels.insert(
        format!("traefik.http.routers.{}.entrypoints", ns),
        config.entrypoints.clone(),
    );

    if !config.service_name.is_empty() {
        labels.insert(
            format!("traefik.http.routers.{}.service", ns),
            config.service_name.clone(),
        );
    }

    if !config.middlewares.is_empty() {
        labels.insert(
            format!("traefik.http.routers.{}.middlewares", ns),
            config.middlewares.clone(),
        );
    }

    labels
}

/// Renders each label as a quoted compose list entry.
pub fn generate_labels(config: &LabelConfig) -> Vec<String> {
    label_map(config)
        .iter()
        .map(|(key, value)| format!("{}- \"{}={}\"", LABEL_INDENT, key, value))
        .collect()
}

/// Prepends the `labels:` key so the block can be pasted into a compose service.
pub fn render_block(labels: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(labels.len() + 1);
    block.push(LABELS_HEADER.to_string());
    block.extend(labels.iter().cloned());
    block
}
