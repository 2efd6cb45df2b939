//! Projections from stored entities to their response shapes

use crate::model::{Driver, DriverListOutput, DriverOutput, ListMeta, ResourceType, Video};

/// Wraps a driver in its `{type, id, attributes}` envelope.
pub fn map_to_driver_output(driver: &Driver) -> DriverOutput {
    DriverOutput {
        resource_type: ResourceType::Drivers,
        id: driver.id.to_string(),
        attributes: driver.attributes.clone(),
    }
}

pub fn map_to_driver_list_output(drivers: &[Driver]) -> DriverListOutput {
    DriverListOutput {
        meta: ListMeta::default(),
        data: drivers.iter().map(map_to_driver_output).collect(),
    }
}

// Videos have no separate response shape.
pub fn map_to_video_output(video: &Video) -> Video {
    video.clone()
}

pub fn map_to_video_list_output(videos: &[Video]) -> Vec<Video> {
    videos.iter().map(map_to_video_output).collect()
}
