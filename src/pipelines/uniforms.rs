//! Named uniform writes.
//!
//! Lights and materials describe themselves as a sequence of named uniform
//! writes (`pointLights[0].att.linear`, `material.reflectance`, ...). A
//! [`UniformSink`] receives those writes and stores them wherever the renderer
//! needs them, for instance a packed GPU block such as
//! [`LightsUniform`](super::light::LightsUniform).

use cgmath::{Vector3, Vector4};

pub trait UniformSink {
    fn set_f32(&mut self, name: &str, value: f32);
    fn set_i32(&mut self, name: &str, value: i32);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
}

/// A parsed uniform name: `array[index].field.sub` or `name.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UniformPath<'a> {
    pub root: &'a str,
    pub index: Option<usize>,
    pub field: &'a str,
}

impl<'a> UniformPath<'a> {
    pub(crate) fn parse(name: &'a str) -> Option<Self> {
        let (head, field) = match name.split_once('.') {
            Some((head, field)) => (head, field),
            None => (name, ""),
        };
        match head.split_once('[') {
            Some((root, rest)) => {
                let index = rest.strip_suffix(']')?.parse().ok()?;
                Some(Self {
                    root,
                    index: Some(index),
                    field,
                })
            }
            None => Some(Self {
                root: head,
                index: None,
                field,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniformPath;

    #[test]
    fn parses_indexed_nested_names() {
        let path = UniformPath::parse("spotLights[3].pl.att.linear").unwrap();
        assert_eq!(path.root, "spotLights");
        assert_eq!(path.index, Some(3));
        assert_eq!(path.field, "pl.att.linear");
    }

    #[test]
    fn parses_plain_names() {
        let path = UniformPath::parse("ambientLight").unwrap();
        assert_eq!(path.root, "ambientLight");
        assert_eq!(path.index, None);
        assert_eq!(path.field, "");
    }

    #[test]
    fn rejects_broken_index() {
        assert!(UniformPath::parse("pointLights[x].color").is_none());
        assert!(UniformPath::parse("pointLights[1.color").is_none());
    }
}
