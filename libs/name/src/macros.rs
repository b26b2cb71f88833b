//! Macros for defining per-resource name facades.

/// Macro to define a typed name facade for one resource type.
///
/// This generates a unit struct with:
/// - `TEMPLATE` and `VARIABLE` constants (plus `SUFFIX` for nested types)
/// - `format()` returning the lazily compiled, process-wide [`Format`]
/// - `generate()` to mint a fresh name with a new random id
/// - `validate()` and `parse()` against the compiled format
/// - `parent()` for nested types, deriving the parent resource's name
///
/// Nested types compose their format by appending `SUFFIX` to the parent
/// facade's format, so the parent segments are never spelled twice.
///
/// # Example
///
/// ```ignore
/// define_name!(StoreNames, template: "stores/{store}", variable: "store");
/// define_name!(
///     ProductNames,
///     parent: StoreNames,
///     suffix: "products/{product}",
///     variable: "product",
///     template: "stores/{store}/products/{product}",
/// );
///
/// let name = StoreNames::generate();
/// let bindings = StoreNames::parse(&name)?;
/// ```
///
/// [`Format`]: crate::Format
#[macro_export]
macro_rules! define_name {
    ($name:ident, template: $template:literal, variable: $variable:literal $(,)?) => {
        /// Typed name operations for this resource type.
        pub struct $name;

        impl $name {
            /// The name template for this resource type.
            pub const TEMPLATE: &'static str = $template;

            /// The variable bound to this resource's own id.
            pub const VARIABLE: &'static str = $variable;

            /// Returns the compiled format for this resource type.
            ///
            /// Compiled once on first use and shared for the process
            /// lifetime.
            #[must_use]
            pub fn format() -> &'static $crate::Format {
                static FORMAT: std::sync::OnceLock<$crate::Format> = std::sync::OnceLock::new();
                FORMAT.get_or_init(|| {
                    $crate::Format::compile(Self::TEMPLATE).expect("template must compile")
                })
            }

            /// Generates a fresh name with a new random resource id.
            #[must_use]
            pub fn generate() -> String {
                let mut bindings = $crate::Bindings::new();
                bindings.set(Self::VARIABLE, $crate::ResourceId::new());
                Self::format()
                    .generate(&bindings)
                    .expect("root template binds exactly one variable")
            }

            /// Validates a name against this resource type's format.
            pub fn validate(name: &str) -> Result<(), $crate::NameError> {
                Self::format().validate(name)
            }

            /// Parses a name, returning the bound resource ids.
            pub fn parse(name: &str) -> Result<$crate::Bindings, $crate::NameError> {
                Self::format().parse(name)
            }
        }
    };
    (
        $name:ident,
        parent: $parent:ident,
        suffix: $suffix:literal,
        variable: $variable:literal,
        template: $template:literal $(,)?
    ) => {
        /// Typed name operations for this resource type.
        pub struct $name;

        impl $name {
            /// The full name template for this resource type.
            pub const TEMPLATE: &'static str = $template;

            /// The trailing segments appended to the parent template.
            pub const SUFFIX: &'static str = $suffix;

            /// The variable bound to this resource's own id.
            pub const VARIABLE: &'static str = $variable;

            /// Returns the compiled format for this resource type.
            ///
            /// Composed from the parent facade's format on first use and
            /// shared for the process lifetime.
            #[must_use]
            pub fn format() -> &'static $crate::Format {
                static FORMAT: std::sync::OnceLock<$crate::Format> = std::sync::OnceLock::new();
                FORMAT.get_or_init(|| {
                    $parent::format()
                        .append(Self::SUFFIX)
                        .expect("suffix must compose with parent template")
                })
            }

            /// Generates a fresh name under the parent the bindings identify.
            ///
            /// Binds a new random id to this resource's variable; every
            /// other variable must already be present in `parent`.
            pub fn generate(parent: &$crate::Bindings) -> Result<String, $crate::NameError> {
                let mut bindings = parent.clone();
                bindings.set(Self::VARIABLE, $crate::ResourceId::new());
                Self::format().generate(&bindings)
            }

            /// Validates a name against this resource type's format.
            pub fn validate(name: &str) -> Result<(), $crate::NameError> {
                Self::format().validate(name)
            }

            /// Parses a name, returning the bound resource ids.
            pub fn parse(name: &str) -> Result<$crate::Bindings, $crate::NameError> {
                Self::format().parse(name)
            }

            /// Derives the parent resource's name from a full child name.
            pub fn parent(name: &str) -> Result<String, $crate::NameError> {
                Self::format().parent(name, $parent::format())
            }
        }
    };
}
