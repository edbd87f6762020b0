//! Cluster infrastructure - the kubectl-backed broker implementation

mod kubectl;

pub use kubectl::KubectlBroker;
