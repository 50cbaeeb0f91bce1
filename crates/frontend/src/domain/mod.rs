pub mod inventory_items;
pub mod item_categories;
pub mod staff;
pub mod travel_agents;
pub mod users;
