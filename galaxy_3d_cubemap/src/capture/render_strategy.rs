/// RenderStrategy - "render these camera parameters into this face".

use crate::error::Galaxy3dResult;
use super::render_request::RenderRequest;

/// Caller-supplied rendering for one cube face
///
/// The strategy clears and draws the scene into `request.target()` using the
/// request's view, projection and viewport. It must be finished with the face
/// when it returns: the driver moves on to the next face immediately.
///
/// Any `FnMut(&RenderRequest) -> Galaxy3dResult<()>` closure is a strategy.
pub trait RenderStrategy {
    /// Render one face. An error aborts the remaining faces.
    fn render_face(&mut self, request: &RenderRequest) -> Galaxy3dResult<()>;
}

impl<F> RenderStrategy for F
where
    F: FnMut(&RenderRequest) -> Galaxy3dResult<()>,
{
    fn render_face(&mut self, request: &RenderRequest) -> Galaxy3dResult<()> {
        self(request)
    }
}
