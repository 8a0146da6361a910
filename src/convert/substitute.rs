use super::VariableStore;

/// Replace every `{{key}}` and `<key>` occurrence for each variable in turn.
///
/// Variables are applied one after another in store order, so a value that
/// itself contains a placeholder is only expanded if that placeholder's
/// variable comes later in the store.
pub fn substitute(text: &str, variables: &VariableStore) -> String {
    let mut result = text.to_string();
    for (key, value) in variables.iter() {
        result = result
            .replace(&format!("{{{{{}}}}}", key), value)
            .replace(&format!("<{}>", key), value);
    }
    result
}
