use cgmath::{Quaternion, Vector3};
use rapier3d::{
    na::{Isometry3, Translation3, UnitQuaternion},
    prelude::*,
};

pub fn npoint_to_cgvec(point: Point<Real>) -> Vector3<f32> {
    Vector3 {
        x: point.x,
        y: point.y,
        z: point.z,
    }
}

pub fn vec_to_npoint(vec: Vector3<f32>) -> Point<Real> {
    point![vec.x, vec.y, vec.z]
}

pub fn vec_to_nvec(vec: Vector3<f32>) -> Vector<Real> {
    vector![vec.x, vec.y, vec.z]
}

pub fn quat_to_nquat(facing: Quaternion<f32>) -> UnitQuaternion<f32> {
    let nquat = rapier3d::na::Quaternion::new(facing.s, facing.v.x, facing.v.y, facing.v.z);
    UnitQuaternion::from_quaternion(nquat)
}

/// Rigid placement for a collider centred at `center` with the given rotation
pub fn isometry_from(center: Vector3<f32>, rotation: Quaternion<f32>) -> Isometry3<f32> {
    Isometry3::from_parts(
        Translation3::new(center.x, center.y, center.z),
        quat_to_nquat(rotation),
    )
}
