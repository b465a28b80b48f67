#[path = "e2e/tank_scenario.rs"]
mod tank_scenario;

#[path = "e2e/containment.rs"]
mod containment;

#[path = "e2e/rejections.rs"]
mod rejections;

#[path = "e2e/multiple_classes.rs"]
mod multiple_classes;

#[path = "e2e/precondition.rs"]
mod precondition;
