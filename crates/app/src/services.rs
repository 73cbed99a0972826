//! Use-case implementations, generic over the port traits they consume.

pub mod terrain_image_controller;
