/// Builds a [`Value`](crate::Value) from JSON-like syntax.
#[macro_export]
macro_rules! value {
    ($($json:tt)+) => {
        $crate::Value::from($crate::__private_serde_json::json!($($json)+))
    };
}
