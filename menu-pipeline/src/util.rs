/// Extract a short type name from the full module path.
///
/// Given `"menu_pipeline::components::top_k_selector::TopKSelector"`,
/// returns `"TopKSelector"`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
