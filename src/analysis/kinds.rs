//! tree-sitter-cpp node kinds and field names used during extraction.

pub const FUNCTION_DEFINITION: &str = "function_definition";
pub const FUNCTION_DECLARATOR: &str = "function_declarator";
pub const PARAMETER_LIST: &str = "parameter_list";
pub const COMPOUND_STATEMENT: &str = "compound_statement";

pub const NAMESPACE_DEFINITION: &str = "namespace_definition";
pub const CLASS_SPECIFIER: &str = "class_specifier";
pub const STRUCT_SPECIFIER: &str = "struct_specifier";

pub const DECLARATOR_FIELD: &str = "declarator";
pub const BODY_FIELD: &str = "body";

/// Kinds that can name a function, searched as one set in document order.
pub const FUNCTION_NAME_KINDS: &[&str] = &[
    "qualified_identifier",
    "scoped_identifier",
    "field_identifier",
    "destructor_name",
    "operator_name",
    "identifier",
];

/// Kinds that can name a namespace (`nested_namespace_specifier` covers
/// `namespace a::b`).
pub const NAMESPACE_NAME_KINDS: &[&str] = &[
    "namespace_identifier",
    "nested_namespace_specifier",
    "identifier",
];

pub const CLASS_NAME_KINDS: &[&str] = &["type_identifier"];

/// Parts of a namespace or class that never hold its own name.
pub const SCOPE_NAME_PRUNE: &[&str] = &[
    "declaration_list",
    "field_declaration_list",
    "base_class_clause",
];
