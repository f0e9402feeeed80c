#[macro_export]
macro_rules! cton {
    (null) => {
        $crate::CtonValue::Null
    };

    (true) => {
        $crate::CtonValue::Bool(true)
    };

    (false) => {
        $crate::CtonValue::Bool(false)
    };

    ([]) => {
        $crate::CtonValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::CtonValue::Array(vec![$($crate::cton!($elem)),*])
    };

    ({}) => {
        $crate::CtonValue::Object($crate::CtonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::CtonMap::new();
        $(
            object.insert($key.to_string(), $crate::cton!($value));
        )*
        $crate::CtonValue::Object(object)
    }};

    // Fallback for any other expression, routed through the same
    // `ToCton` projection the rest of the crate uses.
    ($s:expr) => {{
        $crate::ToCton::to_cton(&$s)
    }};
}
