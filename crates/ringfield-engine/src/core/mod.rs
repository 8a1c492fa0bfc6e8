pub mod rng;
pub mod run_loop;
pub mod scene;
pub mod time;
