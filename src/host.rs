//! Bindings to the page's scene host.
//!
//! Rendering, glTF parsing and orbit controls live in the page script; it
//! exposes `window.createSceneHost(canvas, options)` returning an object with
//! the methods bound below. This module is the only place that talks to it.

use glam::Vec3;
use js_sys::{Array, Float32Array, Function, Promise};
use showcase_core::{Aabb, CameraPose, LoadStatus, ModelSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type SceneHost;

    #[wasm_bindgen(catch, js_namespace = window, js_name = createSceneHost)]
    fn create_scene_host_js(canvas: &web::HtmlCanvasElement, options: &JsValue) -> Result<SceneHost, JsValue>;

    /// Resolves with an opaque model handle.
    #[wasm_bindgen(method, js_name = loadModel)]
    pub fn load_model(this: &SceneHost, url: &str) -> Promise;

    #[wasm_bindgen(method, js_name = addModel)]
    pub fn add_model(this: &SceneHost, model: &JsValue);

    #[wasm_bindgen(method, js_name = addPlaceholder)]
    pub fn add_placeholder(this: &SceneHost);

    #[wasm_bindgen(method, js_name = setModelScale)]
    pub fn set_model_scale(this: &SceneHost, model: &JsValue, scale: f32);

    #[wasm_bindgen(method, js_name = setModelOffset)]
    pub fn set_model_offset(this: &SceneHost, model: &JsValue, x: f32, y: f32, z: f32);

    /// `[min_x, min_y, min_z, max_x, max_y, max_z]` in world space.
    #[wasm_bindgen(method, js_name = modelBounds)]
    fn model_bounds_js(this: &SceneHost, model: &JsValue) -> Float32Array;

    /// Array of `[name, x, y, z]` world positions, traversal order.
    #[wasm_bindgen(method, js_name = namedNodes)]
    fn named_nodes_js(this: &SceneHost, model: &JsValue) -> Array;

    /// `[px, py, pz, tx, ty, tz]`: camera position and orbit target.
    #[wasm_bindgen(method, js_name = cameraPose)]
    fn camera_pose_js(this: &SceneHost) -> Float32Array;

    #[wasm_bindgen(method, js_name = setCameraPose)]
    fn set_camera_pose_js(this: &SceneHost, px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32);

    #[wasm_bindgen(method, js_name = setProjection)]
    pub fn set_projection(this: &SceneHost, fov_deg: f32, aspect: f32, near: f32, far: f32);

    #[wasm_bindgen(method, js_name = setOrbitLimits)]
    pub fn set_orbit_limits(this: &SceneHost, min_distance: f32, max_distance: f32);

    /// Orbit controls' azimuthal angle, radians.
    #[wasm_bindgen(method)]
    pub fn azimuth(this: &SceneHost) -> f32;

    #[wasm_bindgen(method, js_name = setAutoRotate)]
    pub fn set_auto_rotate(this: &SceneHost, enabled: bool);

    #[wasm_bindgen(method, js_name = setParticles)]
    pub fn set_particles(this: &SceneHost, positions: &[f32]);

    #[wasm_bindgen(method, js_name = setRootY)]
    pub fn set_root_y(this: &SceneHost, y: f32);

    /// Css size; the host applies the pixel ratio it was created with.
    #[wasm_bindgen(method)]
    pub fn resize(this: &SceneHost, width: f32, height: f32);

    /// Damping step of the orbit controls.
    #[wasm_bindgen(method, js_name = updateControls)]
    pub fn update_controls(this: &SceneHost);

    #[wasm_bindgen(method)]
    pub fn render(this: &SceneHost);

    #[wasm_bindgen(method, js_name = onControls)]
    pub fn on_controls(this: &SceneHost, start: &Function, end: &Function);
}

/// Initial settings handed to the host when it is created.
#[derive(Clone, Copy, Debug)]
pub struct HostOptions {
    pub fov_deg: f32,
    pub particle_count: usize,
    pub pixel_ratio: f64,
    pub auto_rotate: bool,
}

pub fn create_scene_host(canvas: &web::HtmlCanvasElement, opts: HostOptions) -> anyhow::Result<SceneHost> {
    let options = js_sys::Object::new();
    let set = |key: &str, value: JsValue| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &value)
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    };
    set("fov", JsValue::from_f64(opts.fov_deg as f64))?;
    set("particleCount", JsValue::from_f64(opts.particle_count as f64))?;
    set("pixelRatio", JsValue::from_f64(opts.pixel_ratio))?;
    set("autoRotate", JsValue::from_bool(opts.auto_rotate))?;
    create_scene_host_js(canvas, &options).map_err(|e| anyhow::anyhow!("createSceneHost: {:?}", e))
}

impl SceneHost {
    pub fn model_bounds(&self, model: &JsValue) -> Option<Aabb> {
        Aabb::from_slice(&self.model_bounds_js(model).to_vec())
    }

    pub fn named_nodes(&self, model: &JsValue) -> Vec<(String, Vec3)> {
        self.named_nodes_js(model)
            .iter()
            .filter_map(|entry| {
                let entry: Array = entry.dyn_into().ok()?;
                let name = entry.get(0).as_string()?;
                let coord = |i: u32| entry.get(i).as_f64().map(|v| v as f32);
                Some((name, Vec3::new(coord(1)?, coord(2)?, coord(3)?)))
            })
            .collect()
    }

    pub fn camera_pose(&self) -> Option<CameraPose> {
        match self.camera_pose_js().to_vec().as_slice() {
            [px, py, pz, tx, ty, tz, ..] => Some(CameraPose::new(
                Vec3::new(*px, *py, *pz),
                Vec3::new(*tx, *ty, *tz),
            )),
            _ => None,
        }
    }

    pub fn set_camera_pose(&self, pose: CameraPose) {
        let (p, t) = (pose.position, pose.target);
        self.set_camera_pose_js(p.x, p.y, p.z, t.x, t.y, t.z);
    }
}

/// Routes loader progress to the scene and the loading indicator.
pub struct HostSink<'a> {
    pub host: &'a SceneHost,
    pub indicator: Option<web::HtmlElement>,
}

impl ModelSink<JsValue> for HostSink<'_> {
    fn status(&mut self, status: LoadStatus) {
        if let Some(el) = &self.indicator {
            overlay::show_status(el, &status);
        }
    }

    fn insert_model(&mut self, _url: &str, model: &JsValue) {
        self.host.add_model(model);
    }

    fn insert_placeholder(&mut self) {
        self.host.add_placeholder();
    }
}

/// Load function for [`showcase_core::load_with_fallback`] backed by the host.
pub fn host_loader(
    host: &SceneHost,
) -> impl FnMut(String) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<JsValue, String>>>> {
    let host = host.clone();
    move |url: String| {
        let promise = host.load_model(&url);
        Box::pin(async move {
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(|e| format!("{:?}", e))
        })
    }
}
