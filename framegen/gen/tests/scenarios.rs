//! Scenario tests over assembled specifications.
//!
//! Each test loads or builds a specification, assembles it, and checks the
//! node operations the file assembler relies on.

use std::path::Path;

use framegen_define::{
    AssociatedExternalType, Attribute, Block, BoolAttribute, CollectionAttribute,
    ComputedOptionalRequired, CustomType, ElementType, NestedAttributeObject,
    NestedCollectionAttribute, NestedCollectionBlock, ObjectAttribute, ObjectAttributeType,
    SingleNestedAttribute, SingleNestedBlock, Specification, StringAttribute,
};
use framegen_gen::assemble::{assemble_attribute, assemble_block, assemble_schema};
use framegen_gen::errors::GeneratorError;
use framegen_gen::imports::{ImportSet, VALIDATOR_IMPORT};
use framegen_gen::output::load_specification;
use framegen_gen::render::GoRenderer;
use proptest::prelude::*;

/// Helper to load a fixture from `tests/fixtures`.
fn fixture(name: &str) -> Specification {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    load_specification(&path).expect("fixture should parse")
}

#[test]
fn primitive_attribute() {
    let attribute = Attribute {
        bool: Some(BoolAttribute {
            computed_optional_required: ComputedOptionalRequired::Computed,
            ..Default::default()
        }),
        ..Attribute::named("bool_attribute")
    };
    let node = assemble_attribute(&attribute).unwrap();

    assert_eq!(
        node.schema_fragment("bool_attribute"),
        "\"bool_attribute\": schema.BoolAttribute{\nComputed: true,\n},\n"
    );
    let field = node.field_descriptor("bool_attribute");
    assert_eq!(field.name, "BoolAttribute");
    assert_eq!(field.wire_key, "bool_attribute");
    assert_eq!(field.value_type, "types.Bool");
}

#[test]
fn nested_attribute_with_external_type() {
    let spec = fixture("configuration.json");
    let tree = assemble_schema(&spec.resources[0].schema).unwrap();
    let node = &tree.attributes["configuration"];
    let renderer = GoRenderer::new();

    let fragment = node.schema_fragment("configuration");
    assert!(
        fragment.contains("\"description\": schema.StringAttribute{\nOptional: true,\n},"),
        "{}",
        fragment
    );

    let wrappers = node.custom_type_and_value("configuration", &renderer).unwrap();
    assert!(wrappers.contains("type ConfigurationType struct {"), "{}", wrappers);
    assert!(wrappers.contains("type ConfigurationValue struct {"), "{}", wrappers);

    let functions = node.to_from_functions("configuration", &renderer).unwrap();
    assert!(
        functions.contains(
            "func (v ConfigurationValue) ToApisdkConfiguration(ctx context.Context) (*apisdk.Configuration, diag.Diagnostics) {"
        ),
        "{}",
        functions
    );
    assert!(
        functions.contains("apiObject.Description = v.Description.ValueStringPointer()"),
        "{}",
        functions
    );
    assert!(
        functions.contains("Description: types.StringPointerValue(apiObject.Description),"),
        "{}",
        functions
    );
    assert!(
        functions.contains("if apiObject == nil {\nreturn NewConfigurationValueNull(), diags\n}"),
        "{}",
        functions
    );

    assert_eq!(
        node.field_descriptor("configuration").to_go_field(),
        "Configuration ConfigurationValue `tfsdk:\"configuration\"`"
    );
    assert!(node.imports().contains("example.com/apisdk"));
}

#[test]
fn deeply_nested_list_attributes() {
    let spec = fixture("list_nested_attribute_three.json");
    let tree = assemble_schema(&spec.datasources[0].schema).unwrap();
    let node = &tree.attributes["list_nested_attribute_three"];

    let wrappers = node
        .custom_type_and_value("list_nested_attribute_three", &GoRenderer::new())
        .unwrap();
    for level in ["Three", "Two", "One"] {
        let declaration = format!("type ListNestedAttribute{}Value struct {{", level);
        assert_eq!(wrappers.matches(&declaration).count(), 1, "{}", wrappers);
    }

    let imports = node.imports();
    let all = imports.all();
    assert_eq!(
        all.iter()
            .filter(|path| **path == "example.com/validators/boolcheck")
            .count(),
        1
    );
    assert!(imports.contains(VALIDATOR_IMPORT));
    assert_eq!(all, node.imports().all());
}

#[test]
fn unresolved_element_conversion() {
    let spec = fixture("mixed.json");
    let tree = assemble_schema(&spec.datasources[0].schema).unwrap();
    let node = &tree.attributes["rows"];

    match node.to() {
        Err(GeneratorError::UnresolvedElementConversion { element_kind }) => {
            assert_eq!(element_kind, "list")
        }
        other => panic!("expected unresolved conversion, got {:?}", other),
    }
    assert!(node.from().is_err());

    assert!(node.schema_fragment("rows").contains("ElementType: types.ListType{"));
    assert_eq!(node.field_descriptor("rows").value_type, "RowsValue");
}

#[test]
fn override_beats_external_link() {
    let attribute = Attribute {
        string: Some(StringAttribute {
            custom_type: Some(CustomType {
                import: None,
                type_: "my.RegionType{}".to_string(),
                value_type: "my.RegionValue".to_string(),
            }),
            associated_external_type: Some(AssociatedExternalType {
                import: None,
                type_: "*string".to_string(),
            }),
            ..Default::default()
        }),
        ..Attribute::named("region")
    };
    let node = assemble_attribute(&attribute).unwrap();

    assert_eq!(node.field_descriptor("region").value_type, "my.RegionValue");
    assert!(node.schema_fragment("region").contains("CustomType: my.RegionType{},"));
}

#[test]
fn object_conversion_follows_members() {
    let object = |members: Vec<ObjectAttributeType>| Attribute {
        object: Some(ObjectAttribute {
            attribute_types: members,
            ..Default::default()
        }),
        ..Attribute::named("endpoint")
    };

    let resolved = assemble_attribute(&object(vec![
        ObjectAttributeType::new("enabled", ElementType::bool()),
        ObjectAttributeType::new("host", ElementType::string()),
    ]))
    .unwrap();
    assert!(resolved.to().is_ok());

    let unresolved = assemble_attribute(&object(vec![
        ObjectAttributeType::new("enabled", ElementType::bool()),
        ObjectAttributeType::new("labels", ElementType::map_of(ElementType::string())),
    ]))
    .unwrap();
    match unresolved.to() {
        Err(GeneratorError::UnresolvedElementConversion { element_kind }) => {
            assert_eq!(element_kind, "map")
        }
        other => panic!("expected member error, got {:?}", other),
    }
}

#[test]
fn unimplemented_child_converts_to_null() {
    let inner = Attribute {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![Attribute {
                string: Some(StringAttribute::default()),
                ..Attribute::named("value")
            }],
            ..Default::default()
        }),
        ..Attribute::named("settings")
    };
    let outer = Attribute {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![
                inner,
                Attribute {
                    string: Some(StringAttribute::default()),
                    ..Attribute::named("name")
                },
            ],
            associated_external_type: Some(AssociatedExternalType {
                import: None,
                type_: "*apisdk.Profile".to_string(),
            }),
            ..Default::default()
        }),
        ..Attribute::named("profile")
    };
    let node = assemble_attribute(&outer).unwrap();

    let functions = node.to_from_functions("profile", &GoRenderer::new()).unwrap();
    assert!(functions.contains("Settings: NewSettingsValueNull(),"), "{}", functions);
    assert!(
        functions.contains("Name: types.StringPointerValue(apiObject.Name),"),
        "{}",
        functions
    );
}

#[test]
fn overridden_linked_child_keeps_its_own_type() {
    let inner = Attribute {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![Attribute {
                string: Some(StringAttribute::default()),
                ..Attribute::named("value")
            }],
            custom_type: Some(CustomType {
                import: None,
                type_: "my.InnerType{}".to_string(),
                value_type: "my.InnerValue".to_string(),
            }),
            associated_external_type: Some(AssociatedExternalType {
                import: None,
                type_: "*apisdk.Inner".to_string(),
            }),
            ..Default::default()
        }),
        ..Attribute::named("inner")
    };
    let outer = Attribute {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![inner],
            associated_external_type: Some(AssociatedExternalType {
                import: None,
                type_: "*apisdk.Outer".to_string(),
            }),
            ..Default::default()
        }),
        ..Attribute::named("outer")
    };
    let node = assemble_attribute(&outer).unwrap();
    let renderer = GoRenderer::new();

    let functions = node.to_from_functions("outer", &renderer).unwrap();
    assert!(functions.contains("Inner: my.InnerValue{},"), "{}", functions);
    assert!(!functions.contains("FromApisdkInner"), "{}", functions);
    assert!(!functions.contains("ToApisdkInner"), "{}", functions);

    let wrappers = node.custom_type_and_value("outer", &renderer).unwrap();
    assert!(wrappers.contains("type OuterValue struct"), "{}", wrappers);
    assert!(!wrappers.contains("type InnerValue struct"), "{}", wrappers);
}

#[test]
fn linked_nested_collection_child_delegates_per_element() {
    let rules = Attribute {
        list_nested: Some(NestedCollectionAttribute {
            nested_object: NestedAttributeObject {
                attributes: vec![Attribute {
                    string: Some(StringAttribute::default()),
                    ..Attribute::named("port")
                }],
                associated_external_type: Some(AssociatedExternalType {
                    import: None,
                    type_: "*apisdk.Rule".to_string(),
                }),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Attribute::named("rules")
    };
    let policy = Attribute {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![rules],
            associated_external_type: Some(AssociatedExternalType {
                import: None,
                type_: "*apisdk.Policy".to_string(),
            }),
            ..Default::default()
        }),
        ..Attribute::named("policy")
    };
    let node = assemble_attribute(&policy).unwrap();

    let functions = node.to_from_functions("policy", &GoRenderer::new()).unwrap();
    assert!(functions.contains("func (v PolicyValue) ToApisdkPolicy("), "{}", functions);
    assert!(functions.contains("func (v RulesValue) ToApisdkRule("), "{}", functions);
    assert!(functions.contains("element.ToApisdkRule(ctx)"), "{}", functions);
}

#[test]
fn element_collection_payloads_need_an_element_kind() {
    let attribute = Attribute {
        set: Some(CollectionAttribute {
            element_type: ElementType::default(),
            ..Default::default()
        }),
        ..Attribute::named("members")
    };

    assert!(matches!(
        assemble_attribute(&attribute),
        Err(GeneratorError::UnknownKind { .. })
    ));
}

/// Helper to build an attribute with the kinds selected by `mask` populated.
fn attribute_with_kinds(mask: &[bool]) -> Attribute {
    let mut attribute = Attribute::named("entry");
    let collection = || CollectionAttribute {
        element_type: ElementType::string(),
        ..Default::default()
    };
    if mask[0] {
        attribute.bool = Some(Default::default());
    }
    if mask[1] {
        attribute.float64 = Some(Default::default());
    }
    if mask[2] {
        attribute.int64 = Some(Default::default());
    }
    if mask[3] {
        attribute.number = Some(Default::default());
    }
    if mask[4] {
        attribute.string = Some(Default::default());
    }
    if mask[5] {
        attribute.list = Some(collection());
    }
    if mask[6] {
        attribute.map = Some(collection());
    }
    if mask[7] {
        attribute.set = Some(collection());
    }
    if mask[8] {
        attribute.object = Some(ObjectAttribute::default());
    }
    if mask[9] {
        attribute.single_nested = Some(SingleNestedAttribute::default());
    }
    if mask[10] {
        attribute.list_nested = Some(NestedCollectionAttribute::default());
    }
    if mask[11] {
        attribute.set_nested = Some(NestedCollectionAttribute::default());
    }
    if mask[12] {
        attribute.map_nested = Some(NestedCollectionAttribute::default());
    }
    attribute
}

/// Helper to build a block with the kinds selected by `mask` populated.
fn block_with_kinds(mask: &[bool]) -> Block {
    let mut block = Block::named("entry");
    if mask[0] {
        block.list_nested = Some(NestedCollectionBlock::default());
    }
    if mask[1] {
        block.set_nested = Some(NestedCollectionBlock::default());
    }
    if mask[2] {
        block.single_nested = Some(SingleNestedBlock::default());
    }
    block
}

proptest! {
    #[test]
    fn attribute_assembles_iff_exactly_one_kind(mask in proptest::collection::vec(any::<bool>(), 13)) {
        let populated = mask.iter().filter(|set| **set).count();
        let result = assemble_attribute(&attribute_with_kinds(&mask));

        match result {
            Ok(_) => prop_assert_eq!(populated, 1),
            Err(GeneratorError::UnknownKind { entry, found }) => {
                prop_assert_ne!(populated, 1);
                prop_assert_eq!(entry, "entry");
                prop_assert_eq!(found.len(), populated);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn block_assembles_iff_exactly_one_kind(mask in proptest::collection::vec(any::<bool>(), 3)) {
        let populated = mask.iter().filter(|set| **set).count();
        prop_assert_eq!(assemble_block(&block_with_kinds(&mask)).is_ok(), populated == 1);
    }

    #[test]
    fn merge_keeps_left_paths_first(
        left in proptest::collection::vec("[a-e]", 0..8),
        right in proptest::collection::vec("[a-e]", 0..8),
    ) {
        let mut merged = ImportSet::new();
        for path in &left {
            merged.add(path);
        }
        let mut other = ImportSet::new();
        for path in &right {
            other.add(path);
        }
        merged.merge(&other);

        let mut expected: Vec<&str> = Vec::new();
        for path in left.iter().chain(right.iter()) {
            if !expected.contains(&path.as_str()) {
                expected.push(path.as_str());
            }
        }
        prop_assert_eq!(merged.all(), expected);
    }
}
