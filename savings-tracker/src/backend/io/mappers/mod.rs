pub mod goal_mapper;

pub use goal_mapper::GoalMapper;
