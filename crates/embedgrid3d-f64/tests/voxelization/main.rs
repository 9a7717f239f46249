mod anisotropic_leak;
mod cross_contamination;
mod idempotence;
mod reseeding;
mod sphere_bounding_box;
mod volume_convergence;
