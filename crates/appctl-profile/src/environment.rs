/// Maps an environment name to the API endpoint serving it.
pub trait EnvironmentResolver {
    /// Returns `None` for unknown environments.
    fn endpoint(&self, name: &str) -> Option<String>;
}
