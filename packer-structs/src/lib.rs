pub mod config;
pub mod core;

#[macro_export]
macro_rules! serializable_struct {
    ( $(#[$meta:meta])* $name:ident { $( $(#[$attr:meta])* $field:ident : $type:ty ),* $(,)? } ) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
        pub struct $name {
            $(
                $(#[$attr])*
                pub $field : $type,
            )*
        }
    };
}
