//! Pass module - Run an element transform over a document

use crate::core::config::tags;
use crate::core::element::{Element, Node};
use crate::core::options::{TemplateOptions, TransformOptions};
use crate::core::tpl;

/// Signature shared by the element transforms of the template pipeline
pub type ElementTransform = fn(&mut Element, &TemplateOptions, Option<&TransformOptions>);

/// A transform bound to the tag it applies to
#[derive(Debug, Clone, Copy)]
pub struct Pass {
    pub tag: &'static str,
    pub transform: ElementTransform,
}

/// Rewrites `<tpl>` into `<template>`
pub const TPL_PASS: Pass = Pass {
    tag: tags::TPL,
    transform: tpl::transform_tpl_element,
};

impl Pass {
    /// Apply the transform to every matching element, depth first.
    ///
    /// Returns the number of transformed elements.
    pub fn run(
        &self,
        nodes: &mut [Node],
        tpl_opts: &TemplateOptions,
        opts: Option<&TransformOptions>,
    ) -> usize {
        let mut count = 0;

        for node in nodes.iter_mut() {
            let Node::Tag(element) = node else {
                continue;
            };

            if element.name == self.tag {
                (self.transform)(element, tpl_opts, opts);
                count += 1;
            }

            count += self.run(&mut element.children, tpl_opts, opts);
        }

        count
    }
}
