//! Loading a service definition model from its JSON AST.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::shape::{MemberShape, Shape, ShapeType};
use crate::shape_id::ShapeId;
use crate::traits::Traits;

/// A resolved model: every shape indexed by its absolute id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl Model {
    /// Build a model from already-typed shapes.
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let document: AstDocument = serde_json::from_value(value)?;
        let mut shapes = BTreeMap::new();
        let mut applied = Vec::new();

        for (raw_id, node) in document.shapes {
            let id = ShapeId::parse(&raw_id)?;
            let ast: AstShape = serde_json::from_value(node).map_err(|e| ModelError::InvalidShape {
                shape: raw_id.clone(),
                message: e.to_string(),
            })?;

            if ast.shape_type == "apply" {
                applied.push((id, Traits::from_map(ast.traits)));
                continue;
            }

            let shape = ast.into_shape(id.clone())?;
            shapes.insert(id, shape);
        }

        let mut model = Self { shapes };
        for (target, traits) in applied {
            model.apply_traits(&target, traits)?;
        }
        model.validate_traits()?;

        debug!(
            version = document.smithy.as_deref().unwrap_or("unknown"),
            shapes = model.shapes.len(),
            "loaded model"
        );
        Ok(model)
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn expect_shape(&self, id: &ShapeId) -> Result<&Shape> {
        self.get_shape(id)
            .ok_or_else(|| ModelError::UnknownShape(id.to_string()))
    }

    /// Look up a shape and check its type.
    pub fn expect_shape_of_type(&self, id: &ShapeId, expected: ShapeType) -> Result<&Shape> {
        let shape = self.expect_shape(id)?;
        if shape.shape_type != expected {
            return Err(ModelError::UnexpectedShapeType {
                shape: id.to_string(),
                expected,
                found: shape.shape_type,
            });
        }
        Ok(shape)
    }

    pub fn service(&self, id: &ShapeId) -> Result<&Shape> {
        let shape = self.expect_shape(id)?;
        if shape.shape_type != ShapeType::Service {
            return Err(ModelError::NotAService(id.to_string()));
        }
        Ok(shape)
    }

    /// All shapes in id order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Whether a structure in any namespace has the given local name.
    pub fn has_structure_named(&self, name: &str) -> bool {
        self.shapes
            .values()
            .any(|shape| shape.shape_type == ShapeType::Structure && shape.id.name() == name)
    }

    fn apply_traits(&mut self, target: &ShapeId, traits: Traits) -> Result<()> {
        let container = target.without_member();
        let shape = self
            .shapes
            .get_mut(&container)
            .ok_or_else(|| ModelError::UnknownShape(target.to_string()))?;

        match target.member() {
            None => shape.traits.merge(traits),
            Some(member_name) => {
                let member = shape
                    .members
                    .iter_mut()
                    .find(|m| m.name == member_name)
                    .ok_or_else(|| ModelError::UnknownShape(target.to_string()))?;
                member.traits.merge(traits);
            }
        }
        Ok(())
    }

    fn validate_traits(&self) -> Result<()> {
        for shape in self.shapes.values() {
            shape.enum_trait()?;
            shape.waiter_names()?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct AstDocument {
    #[serde(default)]
    smithy: Option<String>,
    #[serde(default)]
    shapes: Map<String, Value>,
}

#[derive(Deserialize)]
struct AstTarget {
    target: ShapeId,
}

#[derive(Deserialize)]
struct AstMember {
    target: ShapeId,
    #[serde(default)]
    traits: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AstShape {
    #[serde(rename = "type")]
    shape_type: String,
    #[serde(default)]
    members: Map<String, Value>,
    member: Option<AstMember>,
    key: Option<AstMember>,
    value: Option<AstMember>,
    input: Option<AstTarget>,
    output: Option<AstTarget>,
    #[serde(default)]
    errors: Vec<AstTarget>,
    #[serde(default)]
    operations: Vec<AstTarget>,
    #[serde(default)]
    collection_operations: Vec<AstTarget>,
    #[serde(default)]
    resources: Vec<AstTarget>,
    create: Option<AstTarget>,
    put: Option<AstTarget>,
    read: Option<AstTarget>,
    update: Option<AstTarget>,
    delete: Option<AstTarget>,
    list: Option<AstTarget>,
    #[serde(default)]
    traits: Map<String, Value>,
}

impl AstShape {
    fn into_shape(self, id: ShapeId) -> Result<Shape> {
        let shape_type =
            ShapeType::from_ast(&self.shape_type).ok_or_else(|| ModelError::UnsupportedShapeType {
                shape: id.to_string(),
                type_name: self.shape_type.clone(),
            })?;

        let mut members = Vec::with_capacity(self.members.len());
        for (name, node) in self.members {
            let ast: AstMember = serde_json::from_value(node).map_err(|e| ModelError::InvalidShape {
                shape: format!("{id}${name}"),
                message: e.to_string(),
            })?;
            members.push(member_shape(name, ast));
        }
        for (name, ast) in [("member", self.member), ("key", self.key), ("value", self.value)] {
            if let Some(ast) = ast {
                members.push(member_shape(name.to_string(), ast));
            }
        }

        let lifecycle = [
            self.create,
            self.put,
            self.read,
            self.update,
            self.delete,
            self.list,
        ];
        let operations = lifecycle
            .into_iter()
            .flatten()
            .chain(self.operations)
            .chain(self.collection_operations)
            .map(|t| t.target)
            .collect();

        Ok(Shape {
            id,
            shape_type,
            members,
            input: self.input.map(|t| t.target).filter(|t| !t.is_unit()),
            output: self.output.map(|t| t.target).filter(|t| !t.is_unit()),
            errors: self.errors.into_iter().map(|t| t.target).collect(),
            operations,
            resources: self.resources.into_iter().map(|t| t.target).collect(),
            traits: Traits::from_map(self.traits),
        })
    }
}

fn member_shape(name: String, ast: AstMember) -> MemberShape {
    MemberShape {
        name,
        target: ast.target,
        traits: Traits::from_map(ast.traits),
    }
}
