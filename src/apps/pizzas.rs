//! Pizzas application: pizzas and toppings, linked many-to-many.

pub mod manager;
pub mod models;
