//! Greeting text rendering.

/// Template used when no greeting is configured
pub const DEFAULT_TEMPLATE: &str = "Hello, {name}!";

/// Placeholder replaced by the visitor's full name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Generate a greeting message.
///
/// # Examples
/// ```
/// use party::utils::greeting::greet;
/// assert_eq!(greet("Peter Parker"), "Hello, Peter Parker!");
/// ```
pub fn greet(name: &str) -> String {
    render(DEFAULT_TEMPLATE, name)
}

/// Render a greeting template for `name`.
///
/// Every `{name}` occurrence is substituted. A template without the
/// placeholder is returned unchanged.
pub fn render(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}
