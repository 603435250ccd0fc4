//! The set of models, placed objects and lights that make up a frame.

use std::collections::BTreeMap;

use crate::{
    data_structures::{game_object::GameObject, light::SceneLight, model::Model},
    frustum::Frustum,
};

/// Handle of a model registered in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(pub usize);

#[derive(Debug, Default)]
pub struct Scene {
    models: Vec<Model>,
    objects: Vec<GameObject>,
    pub skybox: Option<GameObject>,
    pub light: SceneLight,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model(&mut self, model: Model) -> ModelId {
        self.models.push(model);
        ModelId(self.models.len() - 1)
    }

    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0)
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = GameObject>) {
        self.objects.extend(objects);
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    /// Refresh every object's `inside_frustum` flag from its model's
    /// bounding radius.
    pub fn cull(&mut self, frustum: &Frustum) {
        let models = &self.models;
        frustum.filter(self.objects.iter_mut(), |object| {
            models.get(object.model.0).map_or(0.0, |model| model.bounding_radius)
        });
    }

    /// Objects grouped by the model they draw, so that each model's material
    /// and buffers are bound once per frame.
    pub fn batches(&self) -> BTreeMap<ModelId, Vec<&GameObject>> {
        let mut batches: BTreeMap<ModelId, Vec<&GameObject>> = BTreeMap::new();
        for object in &self.objects {
            batches.entry(object.model).or_default().push(object);
        }
        batches
    }

    /// Like [`batches`](Self::batches) but without objects outside the view
    /// frustum.
    pub fn visible_batches(&self) -> BTreeMap<ModelId, Vec<&GameObject>> {
        let mut batches = self.batches();
        batches.values_mut().for_each(|objects| objects.retain(|o| o.inside_frustum));
        batches.retain(|_, objects| !objects.is_empty());
        batches
    }
}
