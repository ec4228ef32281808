pub mod introspector;
