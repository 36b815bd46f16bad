#[macro_export]
macro_rules! pointer {
    ($path:expr) => {
        <$crate::Pointer as ::std::str::FromStr>::from_str($path).expect("valid pointer")
    };
}
