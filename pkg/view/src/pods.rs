use pkg_types::pod::Pod;

/// Pods that belong to `name`: the pod itself, or pods whose name starts
/// with `name-` (generated suffixes).
pub fn related_pods<'a>(pods: &'a [Pod], name: &str) -> Vec<&'a Pod> {
    let prefix = format!("{}-", name);
    pods.iter()
        .filter(|p| p.name == name || p.name.starts_with(&prefix))
        .collect()
}
