pub mod forums;
