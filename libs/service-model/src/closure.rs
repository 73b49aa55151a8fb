//! Service closure: the shapes and derived helpers reachable from a service.

use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::error::{ModelError, Result};
use crate::model::Model;
use crate::shape::{Shape, ShapeType};
use crate::shape_id::{paginator_name, schema_variable_name, waiter_names, ShapeId};

/// Operations bound to a service, directly or through (nested) resources.
pub fn contained_operations(model: &Model, service: &ShapeId) -> Result<BTreeSet<ShapeId>> {
    let service_shape = model.service(service)?;

    let mut operations = BTreeSet::new();
    let mut seen_resources = BTreeSet::new();
    let mut pending: Vec<&Shape> = vec![service_shape];

    while let Some(container) = pending.pop() {
        for operation in &container.operations {
            model.expect_shape_of_type(operation, ShapeType::Operation)?;
            operations.insert(operation.clone());
        }
        for resource in &container.resources {
            if seen_resources.insert(resource.clone()) {
                pending.push(model.expect_shape_of_type(resource, ShapeType::Resource)?);
            }
        }
    }

    Ok(operations)
}

/// Ordered, categorised view of everything a service's generated package contains.
///
/// Every set is ordered by [`ShapeId`], so iteration is stable across runs.
#[derive(Debug, Clone)]
pub struct ServiceClosure<'m> {
    model: &'m Model,
    service: &'m Shape,
    operations: BTreeSet<ShapeId>,
    enums: BTreeSet<ShapeId>,
    structures: BTreeSet<ShapeId>,
    errors: BTreeSet<ShapeId>,
    waiter_names: BTreeSet<String>,
    paginator_names: BTreeSet<String>,
}

impl<'m> ServiceClosure<'m> {
    pub fn of(model: &'m Model, service: &ShapeId) -> Result<Self> {
        let service_shape = model.service(service)?;
        let operations = contained_operations(model, service)?;

        let mut enums = BTreeSet::new();
        let mut structures = BTreeSet::new();
        let mut errors = BTreeSet::new();
        let mut helper_names = BTreeSet::new();
        let mut paginator_names = BTreeSet::new();

        let mut pending: Vec<ShapeId> = service_shape.errors.clone();
        for id in &operations {
            let operation = model.expect_shape(id)?;
            pending.extend(operation.input.iter().cloned());
            pending.extend(operation.output.iter().cloned());
            pending.extend(operation.errors.iter().cloned());

            for waiter in operation.waiter_names()? {
                helper_names.extend(waiter_names(&waiter));
            }
            if operation.is_paginated() {
                paginator_names.insert(paginator_name(id.name()));
            }
        }

        let mut visited = BTreeSet::new();
        while let Some(id) = pending.pop() {
            if id.is_prelude() || !visited.insert(id.clone()) {
                continue;
            }
            let shape = model.expect_shape(&id)?;

            match shape.shape_type {
                ShapeType::Structure if shape.is_error() => {
                    errors.insert(id);
                }
                ShapeType::Structure | ShapeType::Union => {
                    structures.insert(id);
                }
                ShapeType::Service | ShapeType::Operation | ShapeType::Resource => {
                    return Err(ModelError::InvalidShape {
                        shape: id.to_string(),
                        message: format!("{} cannot be a member target", shape.shape_type),
                    });
                }
                _ if shape.is_enum() => {
                    enums.insert(id);
                    continue;
                }
                _ => {}
            }

            for member in &shape.members {
                trace!(from = %shape.id, to = %member.target, "closure edge");
                pending.push(member.target.clone());
            }
        }

        debug!(
            service = %service,
            operations = operations.len(),
            enums = enums.len(),
            structures = structures.len(),
            errors = errors.len(),
            waiters = helper_names.len(),
            paginators = paginator_names.len(),
            "computed service closure"
        );

        Ok(Self {
            model,
            service: service_shape,
            operations,
            enums,
            structures,
            errors,
            waiter_names: helper_names,
            paginator_names,
        })
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn service(&self) -> &'m Shape {
        self.service
    }

    pub fn operations(&self) -> impl Iterator<Item = &'m Shape> + '_ {
        self.resolve(&self.operations)
    }

    pub fn enums(&self) -> impl Iterator<Item = &'m Shape> + '_ {
        self.resolve(&self.enums)
    }

    /// Structures and unions that are not errors.
    pub fn structural_non_error_shapes(&self) -> impl Iterator<Item = &'m Shape> + '_ {
        self.resolve(&self.structures)
    }

    pub fn error_shapes(&self) -> impl Iterator<Item = &'m Shape> + '_ {
        self.resolve(&self.errors)
    }

    pub fn waiter_names(&self) -> &BTreeSet<String> {
        &self.waiter_names
    }

    pub fn paginator_names(&self) -> &BTreeSet<String> {
        &self.paginator_names
    }

    /// Name of the runtime schema object generated for a shape.
    pub fn shape_schema_variable_name(&self, shape: &Shape) -> String {
        schema_variable_name(shape.name())
    }

    fn resolve<'a>(&'a self, ids: &'a BTreeSet<ShapeId>) -> impl Iterator<Item = &'m Shape> + 'a {
        let model = self.model;
        ids.iter().filter_map(move |id| model.get_shape(id))
    }
}
