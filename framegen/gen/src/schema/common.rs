//! Modifiers shared by every node kind, and the clause writer that emits them.

use framegen_define::ComputedOptionalRequired;

use crate::customization::{AttributeDefault, CodeSnippet, ExternalType, TypeOverride};
use crate::imports::{ImportSet, PLANMODIFIER_IMPORT, VALIDATOR_IMPORT, conversion_imports};
use crate::naming::quote_go_string;

/// Modifiers carried by every attribute kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeCommon {
    pub behavior: ComputedOptionalRequired,
    pub custom_type: Option<TypeOverride>,
    pub external_type: Option<ExternalType>,
    pub sensitive: bool,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub validators: Vec<CodeSnippet>,
    pub plan_modifiers: Vec<CodeSnippet>,
}

impl AttributeCommon {
    /// Whether the node gets a generated primitive wrapper: linked and not
    /// overridden.
    pub fn is_wrapped(&self) -> bool {
        self.wrapped_external().is_some()
    }

    /// The external link of a wrapped node. An override hides the link.
    pub fn wrapped_external(&self) -> Option<&ExternalType> {
        match self.custom_type {
            Some(_) => None,
            None => self.external_type.as_ref(),
        }
    }

    pub fn imports(&self) -> ImportSet {
        customization_imports(
            self.custom_type.as_ref(),
            self.external_type.as_ref(),
            &self.validators,
            &self.plan_modifiers,
        )
    }
}

/// Modifiers carried by every block kind. Blocks have no
/// required/optional/computed behavior and are never sensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockCommon {
    pub custom_type: Option<TypeOverride>,
    pub external_type: Option<ExternalType>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub validators: Vec<CodeSnippet>,
    pub plan_modifiers: Vec<CodeSnippet>,
}

impl BlockCommon {
    /// The external link, unless an override replaces the generated type.
    pub fn wrapped_external(&self) -> Option<&ExternalType> {
        match self.custom_type {
            Some(_) => None,
            None => self.external_type.as_ref(),
        }
    }

    pub fn imports(&self) -> ImportSet {
        customization_imports(
            self.custom_type.as_ref(),
            self.external_type.as_ref(),
            &self.validators,
            &self.plan_modifiers,
        )
    }
}

/// Imports of the customization descriptors, validators, and plan modifiers.
///
/// An external link also pulls in the conversion scaffolding imports, unless
/// an override replaces the generated type and its conversions.
pub(crate) fn customization_imports(
    custom_type: Option<&TypeOverride>,
    external_type: Option<&ExternalType>,
    validators: &[CodeSnippet],
    plan_modifiers: &[CodeSnippet],
) -> ImportSet {
    let mut imports = ImportSet::new();
    if let Some(custom) = custom_type {
        imports.merge(&custom.imports());
    }
    if custom_type.is_none()
        && let Some(external) = external_type
    {
        imports.merge(&external.imports());
        imports.merge(&conversion_imports());
    }
    if !validators.is_empty() {
        imports.add(VALIDATOR_IMPORT);
        for validator in validators {
            imports.merge(&validator.imports());
        }
    }
    if !plan_modifiers.is_empty() {
        imports.add(PLANMODIFIER_IMPORT);
        for modifier in plan_modifiers {
            imports.merge(&modifier.imports());
        }
    }
    imports
}

/// Writes one schema entry clause by clause.
///
/// Every method skips its clause when the value is absent, so callers can
/// chain the full clause order unconditionally.
///
/// ## Examples
///
/// ```
/// use framegen_define::ComputedOptionalRequired;
/// use framegen_gen::schema::common::Clauses;
///
/// let fragment = Clauses::open("bool_attribute", "BoolAttribute")
///     .custom_type(None)
///     .behavior(ComputedOptionalRequired::Computed)
///     .sensitive(false)
///     .description(None)
///     .finish();
///
/// assert_eq!(fragment, "\"bool_attribute\": schema.BoolAttribute{\nComputed: true,\n},\n");
/// ```
#[derive(Debug, Clone)]
pub struct Clauses {
    out: String,
}

impl Clauses {
    /// Opens `"<name>": schema.<schema_type>{`.
    pub fn open(name: &str, schema_type: &str) -> Self {
        Self {
            out: format!("{}: schema.{}{{\n", quote_go_string(name), schema_type),
        }
    }

    /// Opens an unkeyed value such as `NestedObject: schema.NestedAttributeObject{`.
    pub fn open_field(field: &str, schema_type: &str) -> Self {
        Self {
            out: format!("{}: schema.{}{{\n", field, schema_type),
        }
    }

    pub fn custom_type(mut self, expr: Option<String>) -> Self {
        if let Some(expr) = expr {
            self.out.push_str(&format!("CustomType: {},\n", expr));
        }
        self
    }

    /// Appends pre-rendered clause text verbatim.
    pub fn raw(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    pub fn behavior(mut self, behavior: ComputedOptionalRequired) -> Self {
        let clause = match behavior {
            ComputedOptionalRequired::Required => "Required: true,\n",
            ComputedOptionalRequired::Optional => "Optional: true,\n",
            ComputedOptionalRequired::Computed => "Computed: true,\n",
            ComputedOptionalRequired::ComputedOptional => "Optional: true,\nComputed: true,\n",
        };
        self.out.push_str(clause);
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        if sensitive {
            self.out.push_str("Sensitive: true,\n");
        }
        self
    }

    /// Writes `Description` and `MarkdownDescription` from the same text.
    pub fn description(mut self, description: Option<&str>) -> Self {
        if let Some(text) = description {
            let quoted = quote_go_string(text);
            self.out.push_str(&format!("Description: {},\n", quoted));
            self.out.push_str(&format!("MarkdownDescription: {},\n", quoted));
        }
        self
    }

    pub fn deprecation(mut self, message: Option<&str>) -> Self {
        if let Some(message) = message {
            self.out
                .push_str(&format!("DeprecationMessage: {},\n", quote_go_string(message)));
        }
        self
    }

    pub fn validators(mut self, type_name: &str, validators: &[CodeSnippet]) -> Self {
        if !validators.is_empty() {
            self.out
                .push_str(&format!("Validators: []validator.{}{{\n", type_name));
            for validator in validators {
                self.out.push_str(&format!("{},\n", validator.definition));
            }
            self.out.push_str("},\n");
        }
        self
    }

    pub fn plan_modifiers(mut self, type_name: &str, modifiers: &[CodeSnippet]) -> Self {
        if !modifiers.is_empty() {
            self.out
                .push_str(&format!("PlanModifiers: []planmodifier.{}{{\n", type_name));
            for modifier in modifiers {
                self.out.push_str(&format!("{},\n", modifier.definition));
            }
            self.out.push_str("},\n");
        }
        self
    }

    pub fn default(mut self, default: Option<&AttributeDefault>) -> Self {
        if let Some(default) = default {
            self.out
                .push_str(&format!("Default: {},\n", default.expression()));
        }
        self
    }

    /// Closes the entry with `},`.
    pub fn finish(mut self) -> String {
        self.out.push_str("},\n");
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::StaticDefault;
    use crate::imports::CONTEXT_IMPORT;

    #[test]
    fn computed_optional_sets_both_flags() {
        let fragment = Clauses::open("region", "StringAttribute")
            .behavior(ComputedOptionalRequired::ComputedOptional)
            .finish();

        assert!(fragment.contains("Optional: true,\nComputed: true,\n"), "{}", fragment);
    }

    #[test]
    fn clauses_follow_fixed_order() {
        let fragment = Clauses::open("region", "StringAttribute")
            .custom_type(Some("RegionType{}".to_string()))
            .behavior(ComputedOptionalRequired::Optional)
            .sensitive(true)
            .description(Some("The region"))
            .deprecation(Some("Use location"))
            .validators("String", &[CodeSnippet::new("stringvalidator.LengthAtLeast(1)")])
            .plan_modifiers("String", &[CodeSnippet::new("stringplanmodifier.RequiresReplace()")])
            .default(Some(&AttributeDefault::Static(StaticDefault::String(
                "us-east-1".to_string(),
            ))))
            .finish();

        let order = [
            "CustomType:",
            "Optional:",
            "Sensitive:",
            "Description:",
            "MarkdownDescription:",
            "DeprecationMessage:",
            "Validators:",
            "PlanModifiers:",
            "Default:",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|clause| fragment.find(clause).expect(clause))
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "clauses out of order:\n{}",
            fragment
        );
    }

    #[test]
    fn descriptions_are_go_quoted() {
        let fragment = Clauses::open("name", "StringAttribute")
            .description(Some("a \"quoted\" word"))
            .finish();

        assert!(fragment.contains(r#"Description: "a \"quoted\" word","#), "{}", fragment);
    }

    #[test]
    fn external_link_adds_conversion_imports() {
        let common = AttributeCommon {
            external_type: Some(ExternalType::new("*bool")),
            ..Default::default()
        };
        assert!(common.imports().contains(CONTEXT_IMPORT));
    }

    #[test]
    fn validators_pull_in_validator_package() {
        let common = BlockCommon {
            validators: vec![CodeSnippet::new("listvalidator.SizeAtLeast(1)")],
            ..Default::default()
        };
        let imports = common.imports();
        assert!(imports.contains(VALIDATOR_IMPORT));
        assert!(!imports.contains(PLANMODIFIER_IMPORT));
    }
}
