use super::body::{Body, BodyId};
use cgmath::{Vector3, Zero};

/// Ordered collection of the bodies owned by one strategy
///
/// Insertion order is significant: it fixes the pair iteration order of the
/// collision strategy and makes the first body the attractor of the
/// gravitational strategy.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body and returns the id assigned to it
    pub fn add(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Copy of the current body states, for a later [`BodyRegistry::restore`]
    pub fn snapshot(&self) -> Vec<Body> {
        self.bodies.clone()
    }

    /// Replaces every body's state with the snapshot taken earlier
    ///
    /// Ids are kept, so handles held by callers stay valid.
    pub fn restore(&mut self, snapshot: &[Body]) {
        self.bodies = snapshot.to_vec();
    }

    pub fn total_momentum(&self) -> Vector3<f32> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zero(), |acc, p| acc + p)
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    fn ball(x: f32, vx: f32) -> Body {
        Body::sphere(Point3::new(x, 0.0, 0.0), 1.0, 2.0, Vector3::new(vx, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry = BodyRegistry::new();
        let first = registry.add(ball(0.0, 1.0));
        let second = registry.add(ball(5.0, -1.0));

        assert_eq!(first, BodyId(0));
        assert_eq!(second, BodyId(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.bodies()[1].id, second);
        assert_eq!(registry.get(second).unwrap().position().x, 5.0);
        assert!(registry.get(BodyId(7)).is_none());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut registry = BodyRegistry::new();
        let id = registry.add(ball(0.0, 1.0));
        let snapshot = registry.snapshot();

        registry.get_mut(id).unwrap().drift(3.0);
        assert_eq!(registry.get(id).unwrap().position().x, 3.0);

        registry.restore(&snapshot);
        assert_eq!(registry.get(id).unwrap().position().x, 0.0);
    }

    #[test]
    fn test_totals() {
        let mut registry = BodyRegistry::new();
        assert!(registry.is_empty());
        registry.add(ball(0.0, 1.0));
        registry.add(ball(5.0, -1.0));

        assert_eq!(registry.total_momentum(), Vector3::zero());
        assert!((registry.total_kinetic_energy() - 2.0).abs() < 1e-6);
    }
}
