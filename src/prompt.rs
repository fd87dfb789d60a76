/// Turn the selected categories into the request sent to the model.
///
/// Categories are joined with " and " in the order given.
pub fn build_prompt<S: AsRef<str>>(categories: &[S]) -> String {
    match categories {
        [] => "Tell me a random short joke.".to_string(),
        [only] => format!("Tell me a short joke about {}.", only.as_ref()),
        _ => {
            let themes: Vec<&str> = categories.iter().map(|c| c.as_ref()).collect();
            format!(
                "Tell me a short joke combining the themes of {}.",
                themes.join(" and ")
            )
        }
    }
}
