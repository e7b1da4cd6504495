//! Go templates for wrapper types and conversion functions.
//!
//! Templates emit unindented Go; the file assembler re-indents the whole file
//! once with [`reindent`](super::reindent).

use super::{FieldConversion, Fragment, ObjectMember, RenderError, Renderer, WrapperAttribute};
use crate::conversion::{CollectionKind, ScalarConversion};
use crate::customization::ExternalType;
use crate::naming::{quote_go_string, to_camel_case};

/// The built-in renderer for terraform-plugin-framework code.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl GoRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for GoRenderer {
    fn render(&self, fragment: &Fragment) -> Result<Vec<u8>, RenderError> {
        let template = fragment.template_name();
        if fragment.name().is_empty() {
            return Err(template_error(template, "type name is empty"));
        }

        let text = match fragment {
            Fragment::ObjectWrapper { name, attributes } => object_wrapper(name, attributes),
            Fragment::PrimitiveWrapper { name, base } => {
                if base.is_empty() {
                    return Err(template_error(template, "base type is empty"));
                }
                primitive_wrapper(name, base)
            }
            Fragment::ScalarToFrom {
                name,
                external,
                conversion,
            } => {
                check_external(template, external)?;
                scalar_to_from(name, external, conversion)
            }
            Fragment::CollectionToFrom {
                name,
                external,
                collection,
                element_type,
            } => {
                check_external(template, external)?;
                collection_to_from(name, external, *collection, element_type)
            }
            Fragment::ObjectToFrom {
                name,
                external,
                members,
                attr_types,
            } => {
                check_external(template, external)?;
                object_to_from(name, external, members, attr_types)
            }
            Fragment::NestedToFrom {
                name,
                external,
                fields,
            } => {
                check_external(template, external)?;
                nested_to_from(name, external, fields)
            }
        };

        Ok(text.into_bytes())
    }
}

fn template_error(template: &str, reason: &str) -> RenderError {
    RenderError::Template {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}

fn check_external(template: &str, external: &ExternalType) -> Result<(), RenderError> {
    if external.type_reference().is_empty() {
        return Err(template_error(template, "associated external type is empty"));
    }
    Ok(())
}

fn object_wrapper(name: &str, attributes: &[WrapperAttribute]) -> String {
    let type_name = format!("{}Type", name);
    let value_name = format!("{}Value", name);
    let mut out = String::new();

    // Type
    out.push_str(&format!(
        "var _ basetypes.ObjectTypable = {t}{{}}\n\n\
         type {t} struct {{\n\
         basetypes.ObjectType\n\
         }}\n\n\
         func (t {t}) Equal(o attr.Type) bool {{\n\
         other, ok := o.({t})\n\
         if !ok {{\n\
         return false\n\
         }}\n\
         return t.ObjectType.Equal(other.ObjectType)\n\
         }}\n\n\
         func (t {t}) String() string {{\n\
         return fmt.Sprintf(\"%T\", t)\n\
         }}\n\n",
        t = type_name
    ));

    out.push_str(&format!(
        "func (t {t}) ValueFromObject(ctx context.Context, in basetypes.ObjectValue) (basetypes.ObjectValuable, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if in.IsNull() {{\n\
         return New{v}Null(), diags\n\
         }}\n\n\
         if in.IsUnknown() {{\n\
         return New{v}Unknown(), diags\n\
         }}\n\n",
        t = type_name,
        v = value_name
    ));
    if !attributes.is_empty() {
        out.push_str("attributes := in.Attributes()\n\n");
    }
    for attribute in attributes {
        let local = to_camel_case(&attribute.wire_key);
        out.push_str(&format!(
            "{l}Attribute, ok := attributes[{k}]\n\n\
             if !ok {{\n\
             diags.AddError(\"Attribute Missing\", `{w} is missing from object`)\n\n\
             return New{v}Unknown(), diags\n\
             }}\n\n\
             {l}Val, ok := {l}Attribute.({vt})\n\n\
             if !ok {{\n\
             diags.AddError(\"Attribute Wrong Type\", fmt.Sprintf(`{w} expected to be {vt}, was: %T`, {l}Attribute))\n\
             }}\n\n",
            l = local,
            k = quote_go_string(&attribute.wire_key),
            w = attribute.wire_key,
            v = value_name,
            vt = attribute.value_type
        ));
    }
    out.push_str(&format!(
        "if diags.HasError() {{\n\
         return New{v}Unknown(), diags\n\
         }}\n\n\
         return {v}{{\n",
        v = value_name
    ));
    for attribute in attributes {
        out.push_str(&format!(
            "{}: {}Val,\n",
            attribute.field,
            to_camel_case(&attribute.wire_key)
        ));
    }
    out.push_str("state: attr.ValueStateKnown,\n}, diags\n}\n\n");

    out.push_str(&format!(
        "func (t {t}) ValueFromTerraform(ctx context.Context, in tftypes.Value) (attr.Value, error) {{\n\
         attrValue, err := t.ObjectType.ValueFromTerraform(ctx, in)\n\n\
         if err != nil {{\n\
         return nil, err\n\
         }}\n\n\
         objectValue, ok := attrValue.(basetypes.ObjectValue)\n\n\
         if !ok {{\n\
         return nil, fmt.Errorf(\"unexpected value type of %T\", attrValue)\n\
         }}\n\n\
         objectValuable, diags := t.ValueFromObject(ctx, objectValue)\n\n\
         if diags.HasError() {{\n\
         return nil, fmt.Errorf(\"unexpected error converting ObjectValue to ObjectValuable: %v\", diags)\n\
         }}\n\n\
         return objectValuable, nil\n\
         }}\n\n\
         func (t {t}) ValueType(ctx context.Context) attr.Value {{\n\
         return {v}{{}}\n\
         }}\n\n",
        t = type_name,
        v = value_name
    ));

    // Value
    out.push_str(&format!(
        "var _ basetypes.ObjectValuable = {v}{{}}\n\n\
         type {v} struct {{\n",
        v = value_name
    ));
    for attribute in attributes {
        out.push_str(&format!(
            "{} {} `tfsdk:\"{}\"`\n",
            attribute.field, attribute.value_type, attribute.wire_key
        ));
    }
    out.push_str(&format!(
        "state attr.ValueState\n\
         }}\n\n\
         func New{v}Null() {v} {{\n\
         return {v}{{\n\
         state: attr.ValueStateNull,\n\
         }}\n\
         }}\n\n\
         func New{v}Unknown() {v} {{\n\
         return {v}{{\n\
         state: attr.ValueStateUnknown,\n\
         }}\n\
         }}\n\n\
         func (v {v}) ToTerraformValue(ctx context.Context) (tftypes.Value, error) {{\n\
         objectVal, diags := v.ToObjectValue(ctx)\n\n\
         if diags.HasError() {{\n\
         return tftypes.Value{{}}, fmt.Errorf(\"converting %T: %v\", v, diags)\n\
         }}\n\n\
         return objectVal.ToTerraformValue(ctx)\n\
         }}\n\n\
         func (v {v}) IsNull() bool {{\n\
         return v.state == attr.ValueStateNull\n\
         }}\n\n\
         func (v {v}) IsUnknown() bool {{\n\
         return v.state == attr.ValueStateUnknown\n\
         }}\n\n\
         func (v {v}) String() string {{\n\
         return fmt.Sprintf(\"%T(%s)\", v, v.state)\n\
         }}\n\n\
         func (v {v}) ToObjectValue(ctx context.Context) (basetypes.ObjectValue, diag.Diagnostics) {{\n\
         switch v.state {{\n\
         case attr.ValueStateNull:\n\
         return types.ObjectNull(v.AttributeTypes(ctx)), nil\n\
         case attr.ValueStateUnknown:\n\
         return types.ObjectUnknown(v.AttributeTypes(ctx)), nil\n\
         }}\n\n\
         return types.ObjectValue(v.AttributeTypes(ctx), map[string]attr.Value{{\n",
        v = value_name
    ));
    for attribute in attributes {
        out.push_str(&format!(
            "{}: v.{},\n",
            quote_go_string(&attribute.wire_key),
            attribute.field
        ));
    }
    out.push_str(&format!(
        "}})\n\
         }}\n\n\
         func (v {v}) Equal(o attr.Value) bool {{\n\
         other, ok := o.({v})\n\n\
         if !ok {{\n\
         return false\n\
         }}\n\n\
         if v.state != other.state {{\n\
         return false\n\
         }}\n\n\
         if v.state != attr.ValueStateKnown {{\n\
         return true\n\
         }}\n\n",
        v = value_name
    ));
    for attribute in attributes {
        out.push_str(&format!(
            "if !v.{f}.Equal(other.{f}) {{\n\
             return false\n\
             }}\n\n",
            f = attribute.field
        ));
    }
    out.push_str(&format!(
        "return true\n\
         }}\n\n\
         func (v {v}) Type(ctx context.Context) attr.Type {{\n\
         return {t}{{\n\
         basetypes.ObjectType{{\n\
         AttrTypes: v.AttributeTypes(ctx),\n\
         }},\n\
         }}\n\
         }}\n\n\
         func (v {v}) AttributeTypes(ctx context.Context) map[string]attr.Type {{\n\
         return map[string]attr.Type{{\n",
        t = type_name,
        v = value_name
    ));
    for attribute in attributes {
        out.push_str(&format!(
            "{}: {},\n",
            quote_go_string(&attribute.wire_key),
            attribute.attr_type
        ));
    }
    out.push_str("}\n}\n");
    out
}

fn primitive_wrapper(name: &str, base: &str) -> String {
    let type_name = format!("{}Type", name);
    let value_name = format!("{}Value", name);
    let base_local = to_camel_case(base);
    let value_type_expr = match base {
        "List" | "Map" | "Set" => format!(
            "{t}{{\n{b}Type: basetypes.{b}Type{{\nElemType: v.ElementType(ctx),\n}},\n}}",
            t = type_name,
            b = base
        ),
        "Object" => format!(
            "{t}{{\nObjectType: basetypes.ObjectType{{\nAttrTypes: v.AttributeTypes(ctx),\n}},\n}}",
            t = type_name
        ),
        _ => format!("{}{{}}", type_name),
    };

    format!(
        "var _ basetypes.{b}Typable = {t}{{}}\n\n\
         type {t} struct {{\n\
         basetypes.{b}Type\n\
         }}\n\n\
         func (t {t}) Equal(o attr.Type) bool {{\n\
         other, ok := o.({t})\n\n\
         if !ok {{\n\
         return false\n\
         }}\n\n\
         return t.{b}Type.Equal(other.{b}Type)\n\
         }}\n\n\
         func (t {t}) String() string {{\n\
         return fmt.Sprintf(\"%T\", t)\n\
         }}\n\n\
         func (t {t}) ValueFrom{b}(ctx context.Context, in basetypes.{b}Value) (basetypes.{b}Valuable, diag.Diagnostics) {{\n\
         return {v}{{\n\
         {b}Value: in,\n\
         }}, nil\n\
         }}\n\n\
         func (t {t}) ValueFromTerraform(ctx context.Context, in tftypes.Value) (attr.Value, error) {{\n\
         attrValue, err := t.{b}Type.ValueFromTerraform(ctx, in)\n\n\
         if err != nil {{\n\
         return nil, err\n\
         }}\n\n\
         {l}Value, ok := attrValue.(basetypes.{b}Value)\n\n\
         if !ok {{\n\
         return nil, fmt.Errorf(\"unexpected value type of %T\", attrValue)\n\
         }}\n\n\
         {l}Valuable, diags := t.ValueFrom{b}(ctx, {l}Value)\n\n\
         if diags.HasError() {{\n\
         return nil, fmt.Errorf(\"unexpected error converting {b}Value to {b}Valuable: %v\", diags)\n\
         }}\n\n\
         return {l}Valuable, nil\n\
         }}\n\n\
         func (t {t}) ValueType(ctx context.Context) attr.Value {{\n\
         return {v}{{}}\n\
         }}\n\n\
         var _ basetypes.{b}Valuable = {v}{{}}\n\n\
         type {v} struct {{\n\
         basetypes.{b}Value\n\
         }}\n\n\
         func (v {v}) Equal(o attr.Value) bool {{\n\
         other, ok := o.({v})\n\n\
         if !ok {{\n\
         return false\n\
         }}\n\n\
         return v.{b}Value.Equal(other.{b}Value)\n\
         }}\n\n\
         func (v {v}) Type(ctx context.Context) attr.Type {{\n\
         return {vte}\n\
         }}\n",
        b = base,
        t = type_name,
        v = value_name,
        l = base_local,
        vte = value_type_expr
    )
}

fn scalar_to_from(name: &str, external: &ExternalType, conversion: &ScalarConversion) -> String {
    let value_name = format!("{}Value", name);
    let ext = external.to_pascal_case();
    let pointer = external.pointer_type();
    let base = conversion.kind.type_name();

    format!(
        "func (v {v}) To{e}(ctx context.Context) ({p}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if v.IsNull() || v.IsUnknown() {{\n\
         return nil, diags\n\
         }}\n\n\
         return v.{to}(), diags\n\
         }}\n\n\
         func (v {v}) From{e}(ctx context.Context, apiObject {p}) ({v}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if apiObject == nil {{\n\
         return {v}{{\n\
         {b}Value: types.{b}Null(),\n\
         }}, diags\n\
         }}\n\n\
         return {v}{{\n\
         {b}Value: {from}(apiObject),\n\
         }}, diags\n\
         }}\n",
        v = value_name,
        e = ext,
        p = pointer,
        b = base,
        to = conversion.to_method(),
        from = conversion.from_function()
    )
}

fn collection_to_from(
    name: &str,
    external: &ExternalType,
    collection: CollectionKind,
    element_type: &str,
) -> String {
    let value_name = format!("{}Value", name);
    let ext = external.to_pascal_case();
    let pointer = external.pointer_type();
    let reference = external.type_reference();
    let base = collection.type_name();

    format!(
        "func (v {v}) To{e}(ctx context.Context) ({p}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if v.IsNull() || v.IsUnknown() {{\n\
         return nil, diags\n\
         }}\n\n\
         var apiObject {r}\n\n\
         diags.Append(v.ElementsAs(ctx, &apiObject, false)...)\n\n\
         if diags.HasError() {{\n\
         return nil, diags\n\
         }}\n\n\
         return &apiObject, diags\n\
         }}\n\n\
         func (v {v}) From{e}(ctx context.Context, apiObject {p}) ({v}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if apiObject == nil {{\n\
         return {v}{{\n\
         {b}Value: types.{b}Null({et}),\n\
         }}, diags\n\
         }}\n\n\
         value, d := {vf}(ctx, {et}, *apiObject)\n\n\
         diags.Append(d...)\n\n\
         if diags.HasError() {{\n\
         return {v}{{\n\
         {b}Value: types.{b}Unknown({et}),\n\
         }}, diags\n\
         }}\n\n\
         return {v}{{\n\
         {b}Value: value,\n\
         }}, diags\n\
         }}\n",
        v = value_name,
        e = ext,
        p = pointer,
        r = reference,
        b = base,
        et = element_type,
        vf = collection.value_from()
    )
}

fn member_assignments(target: &str, source: &str, members: &[ObjectMember]) -> String {
    let mut out = String::new();
    for member in members {
        out.push_str(&format!(
            "if value, ok := {s}[{k}].({bv}); ok {{\n\
             {t}.{f} = value.{to}()\n\
             }}\n\n",
            s = source,
            k = quote_go_string(&member.wire_key),
            bv = member.conversion.base_value(),
            t = target,
            f = member.field,
            to = member.conversion.to_method()
        ));
    }
    out
}

fn member_values(source: &str, members: &[ObjectMember]) -> String {
    let mut out = String::from("map[string]attr.Value{\n");
    for member in members {
        out.push_str(&format!(
            "{}: {}({}.{}),\n",
            quote_go_string(&member.wire_key),
            member.conversion.from_function(),
            source,
            member.field
        ));
    }
    out.push('}');
    out
}

fn object_to_from(
    name: &str,
    external: &ExternalType,
    members: &[ObjectMember],
    attr_types: &str,
) -> String {
    let value_name = format!("{}Value", name);
    let ext = external.to_pascal_case();
    let pointer = external.pointer_type();
    let reference = external.type_reference();

    let mut out = format!(
        "func (v {v}) To{e}(ctx context.Context) ({p}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if v.IsNull() || v.IsUnknown() {{\n\
         return nil, diags\n\
         }}\n\n\
         var apiObject {r}\n\n",
        v = value_name,
        e = ext,
        p = pointer,
        r = reference
    );
    if !members.is_empty() {
        out.push_str("attributes := v.Attributes()\n\n");
        out.push_str(&member_assignments("apiObject", "attributes", members));
    }
    out.push_str(&format!(
        "return &apiObject, diags\n\
         }}\n\n\
         func (v {v}) From{e}(ctx context.Context, apiObject {p}) ({v}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if apiObject == nil {{\n\
         return {v}{{\n\
         ObjectValue: types.ObjectNull({at}),\n\
         }}, diags\n\
         }}\n\n\
         value, d := types.ObjectValue({at}, {mv})\n\n\
         diags.Append(d...)\n\n\
         return {v}{{\n\
         ObjectValue: value,\n\
         }}, diags\n\
         }}\n",
        v = value_name,
        e = ext,
        p = pointer,
        at = attr_types,
        mv = member_values("apiObject", members)
    ));
    out
}

fn nested_to_lines(conversion: &FieldConversion) -> String {
    match conversion {
        FieldConversion::Scalar { field, conversion } => {
            format!("apiObject.{f} = v.{f}.{to}()\n\n", f = field, to = conversion.to_method())
        }
        FieldConversion::Collection { field, .. } => format!(
            "if !v.{f}.IsNull() && !v.{f}.IsUnknown() {{\n\
             diags.Append(v.{f}.ElementsAs(ctx, &apiObject.{f}, false)...)\n\
             }}\n\n",
            f = field
        ),
        FieldConversion::Object { field, members, .. } => {
            let local = to_camel_case(field);
            format!(
                "if !v.{f}.IsNull() && !v.{f}.IsUnknown() {{\n\
                 {l}Attributes := v.{f}.Attributes()\n\n\
                 {assign}\
                 }}\n\n",
                f = field,
                l = local,
                assign = member_assignments(
                    &format!("apiObject.{}", field),
                    &format!("{}Attributes", local),
                    members
                )
            )
        }
        FieldConversion::Delegate {
            field, external, ..
        } => {
            let local = format!("{}Api", to_camel_case(field));
            format!(
                "{l}, d := v.{f}.To{e}(ctx)\n\n\
                 diags.Append(d...)\n\n\
                 apiObject.{f} = {l}\n\n",
                l = local,
                f = field,
                e = external.to_pascal_case()
            )
        }
        FieldConversion::NestedCollection {
            field,
            collection,
            value_type,
            external,
        } => {
            let (elements, assign, init) = match collection {
                CollectionKind::Map => (
                    format!("map[string]{}", value_type),
                    format!("apiObject.{}[key] = item", field),
                    format!(
                        "apiObject.{} = make(map[string]{})\n\n",
                        field,
                        external.pointer_type()
                    ),
                ),
                CollectionKind::List | CollectionKind::Set => (
                    format!("[]{}", value_type),
                    format!("apiObject.{f} = append(apiObject.{f}, item)", f = field),
                    String::new(),
                ),
            };
            let key = match collection {
                CollectionKind::Map => "key",
                CollectionKind::List | CollectionKind::Set => "_",
            };
            let local = to_camel_case(field);
            format!(
                "if !v.{f}.IsNull() && !v.{f}.IsUnknown() {{\n\
                 var {l}Elements {el}\n\n\
                 diags.Append(v.{f}.ElementsAs(ctx, &{l}Elements, false)...)\n\n\
                 {init}\
                 for {k}, element := range {l}Elements {{\n\
                 item, d := element.To{e}(ctx)\n\n\
                 diags.Append(d...)\n\n\
                 if item != nil {{\n\
                 {assign}\n\
                 }}\n\
                 }}\n\
                 }}\n\n",
                f = field,
                l = local,
                el = elements,
                init = init,
                k = key,
                e = external.to_pascal_case(),
                assign = assign
            )
        }
        FieldConversion::Null { .. } => String::new(),
    }
}

/// Statements run before the value literal, and the field's literal expression.
fn nested_from_parts(conversion: &FieldConversion) -> (String, String) {
    match conversion {
        FieldConversion::Scalar { field, conversion } => (
            String::new(),
            format!("{}(apiObject.{})", conversion.from_function(), field),
        ),
        FieldConversion::Collection {
            field,
            collection,
            element_type,
        } => {
            let local = format!("{}Val", to_camel_case(field));
            (
                format!(
                    "{l}, d := {vf}(ctx, {et}, apiObject.{f})\n\n\
                     diags.Append(d...)\n\n",
                    l = local,
                    vf = collection.value_from(),
                    et = element_type,
                    f = field
                ),
                local,
            )
        }
        FieldConversion::Object {
            field,
            members,
            attr_types,
        } => {
            let local = format!("{}Val", to_camel_case(field));
            (
                format!(
                    "{l}, d := types.ObjectValue({at}, {mv})\n\n\
                     diags.Append(d...)\n\n",
                    l = local,
                    at = attr_types,
                    mv = member_values(&format!("apiObject.{}", field), members)
                ),
                local,
            )
        }
        FieldConversion::Delegate {
            field,
            value_type,
            external,
        } => {
            let local = format!("{}Val", to_camel_case(field));
            (
                format!(
                    "{l}, d := {vt}{{}}.From{e}(ctx, apiObject.{f})\n\n\
                     diags.Append(d...)\n\n",
                    l = local,
                    vt = value_type,
                    e = external.to_pascal_case(),
                    f = field
                ),
                local,
            )
        }
        FieldConversion::NestedCollection {
            field,
            collection,
            value_type,
            external,
        } => {
            let camel = to_camel_case(field);
            let local = format!("{}Val", camel);
            let (declare, key, push) = match collection {
                CollectionKind::Map => (
                    format!("{}Elements := make(map[string]attr.Value)", camel),
                    "key",
                    format!("{}Elements[key] = element", camel),
                ),
                CollectionKind::List | CollectionKind::Set => (
                    format!("var {}Elements []attr.Value", camel),
                    "_",
                    format!("{c}Elements = append({c}Elements, element)", c = camel),
                ),
            };
            (
                format!(
                    "{declare}\n\n\
                     for {k}, item := range apiObject.{f} {{\n\
                     element, d := {vt}{{}}.From{e}(ctx, item)\n\n\
                     diags.Append(d...)\n\n\
                     {push}\n\
                     }}\n\n\
                     {l}, d := types.{b}Value({vt}{{}}.Type(ctx), {c}Elements)\n\n\
                     diags.Append(d...)\n\n",
                    declare = declare,
                    k = key,
                    f = field,
                    vt = value_type,
                    e = external.to_pascal_case(),
                    push = push,
                    l = local,
                    b = collection.type_name(),
                    c = camel
                ),
                local,
            )
        }
        FieldConversion::Null { null_expr, .. } => (String::new(), null_expr.clone()),
    }
}

fn nested_to_from(name: &str, external: &ExternalType, fields: &[FieldConversion]) -> String {
    let value_name = format!("{}Value", name);
    let ext = external.to_pascal_case();
    let pointer = external.pointer_type();
    let reference = external.type_reference();

    let mut out = format!(
        "func (v {v}) To{e}(ctx context.Context) ({p}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if v.IsNull() || v.IsUnknown() {{\n\
         return nil, diags\n\
         }}\n\n\
         var apiObject {r}\n\n",
        v = value_name,
        e = ext,
        p = pointer,
        r = reference
    );
    for field in fields {
        out.push_str(&nested_to_lines(field));
    }
    out.push_str(&format!(
        "return &apiObject, diags\n\
         }}\n\n\
         func (v {v}) From{e}(ctx context.Context, apiObject {p}) ({v}, diag.Diagnostics) {{\n\
         var diags diag.Diagnostics\n\n\
         if apiObject == nil {{\n\
         return New{v}Null(), diags\n\
         }}\n\n",
        v = value_name,
        e = ext,
        p = pointer
    ));

    let mut literal = String::new();
    for field in fields {
        let (statements, expr) = nested_from_parts(field);
        out.push_str(&statements);
        literal.push_str(&format!("{}: {},\n", field.field(), expr));
    }
    out.push_str(&format!(
        "return {v}{{\n\
         {literal}\
         state: attr.ValueStateKnown,\n\
         }}, diags\n\
         }}\n",
        v = value_name,
        literal = literal
    ));
    out
}
