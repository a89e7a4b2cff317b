use crate::arguments::Arguments;

/// Serialize parsed arguments to a pretty-printed JSON string.
pub fn to_pretty_json(args: &Arguments) -> String {
    serde_json::to_string_pretty(args).expect("Arguments serialization cannot fail")
}
