pub mod frame_clock;
pub mod input_system;

pub use frame_clock::{ FrameGate, FrameState };
pub use input_system::{ key_action, receive_key_event, InputAction };
