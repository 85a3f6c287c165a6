//! Tpl module - Rewrite tpl elements into template elements
//!
//! `<tpl :data="a: 1">` becomes `<template data="{a: 1}">` when data attribute
//! normalization is enabled, otherwise only the tag is renamed.

use crate::core::config::{attrs, tags};
use crate::core::element::{AttrValue, Element};
use crate::core::options::{TemplateOptions, TransformOptions};
use crate::core::pattern;

/// Transform a tpl element in place
pub fn transform_tpl_element(
    element: &mut Element,
    _tpl_opts: &TemplateOptions,
    opts: Option<&TransformOptions>,
) {
    element.name = tags::TEMPLATE.to_string();

    let transform_data_attr = opts.is_some_and(|o| o.transform_data_attr);
    if !transform_data_attr {
        return;
    }

    let Some(value) = element.attributes.remove(attrs::DATA_BINDING) else {
        return;
    };

    // Only text is trimmed and braced, parsed values pass through as is
    let value = match value {
        AttrValue::Text(text) => AttrValue::Text(pattern::normalize_data_expr(&text)),
        other => other,
    };

    element.attributes.insert(attrs::DATA.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enabled() -> TransformOptions {
        TransformOptions {
            transform_data_attr: true,
        }
    }

    fn tpl(data: impl Into<AttrValue>) -> Element {
        Element::new("tpl")
            .with_attr(":data", data)
            .with_attr("is", "item")
    }

    #[test]
    fn test_name_always_becomes_template() {
        let tpl_opts = TemplateOptions::default();
        for opts in [None, Some(TransformOptions::default()), Some(enabled())] {
            let mut element = Element::new("tpl");
            transform_tpl_element(&mut element, &tpl_opts, opts.as_ref());
            assert_eq!(element.name, "template");
        }
    }

    #[test]
    fn test_without_options_attributes_untouched() {
        let mut element = tpl("foo: 1");
        let before = element.attributes.clone();

        transform_tpl_element(&mut element, &TemplateOptions::default(), None);

        assert_eq!(element.attributes, before);
    }

    #[test]
    fn test_disabled_flag_attributes_untouched() {
        let mut element = tpl("foo: 1");
        let before = element.attributes.clone();

        transform_tpl_element(
            &mut element,
            &TemplateOptions::default(),
            Some(&TransformOptions::default()),
        );

        assert_eq!(element.attributes, before);
    }

    #[test]
    fn test_no_data_binding_no_data_attr() {
        let mut element = Element::new("tpl").with_attr("is", "item");
        let before = element.attributes.clone();

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert_eq!(element.attributes, before);
        assert!(!element.attributes.contains_key("data"));
    }

    #[test]
    fn test_bare_object_is_trimmed_and_wrapped() {
        let mut element = tpl("  foo: 1, bar: 2  ");

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert!(!element.attributes.contains_key(":data"));
        assert_eq!(element.attributes["data"], AttrValue::from("{foo: 1, bar: 2}"));
        assert_eq!(element.attributes["is"], AttrValue::from("item"));
    }

    #[test]
    fn test_braced_object_not_wrapped_twice() {
        let mut element = tpl(" {foo: 1} ");

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert_eq!(element.attributes["data"], AttrValue::from("{foo: 1}"));
    }

    #[test]
    fn test_expression_passes_through() {
        let mut element = tpl("someExpression()");

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert_eq!(element.attributes["data"], AttrValue::from("someExpression()"));
    }

    #[test]
    fn test_non_text_value_moved_verbatim() {
        let structured = AttrValue::Structured(json!({"foo": "  bar: 1  "}));
        let mut element = Element::new("tpl").with_attr(":data", structured.clone());

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert!(!element.attributes.contains_key(":data"));
        assert_eq!(element.attributes["data"], structured);

        let mut flagged = Element::new("tpl").with_attr(":data", true);
        transform_tpl_element(&mut flagged, &TemplateOptions::default(), Some(&enabled()));
        assert_eq!(flagged.attributes["data"], AttrValue::Flag(true));
    }

    #[test]
    fn test_existing_data_attr_is_replaced() {
        let mut element = tpl("a: 1").with_attr("data", "stale");

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&enabled()));

        assert_eq!(element.attributes["data"], AttrValue::from("{a: 1}"));
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut element = tpl("  foo: 1  ");
        let opts = enabled();

        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&opts));
        let once = element.clone();
        transform_tpl_element(&mut element, &TemplateOptions::default(), Some(&opts));

        assert_eq!(element, once);
        assert_eq!(element.attributes["data"], AttrValue::from("{foo: 1}"));
    }
}
