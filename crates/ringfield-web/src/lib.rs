pub mod runner;

pub use js_sys;
pub use runner::FieldRunner;

/// Generate all `#[wasm_bindgen]` exports for a field.
///
/// Generates:
/// - `thread_local!` storage for the FieldRunner
/// - `with_runner()` helper that builds the runner on first use
/// - the wasm-bindgen exports (field_init, field_frame, field_stop, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod field;
/// use field::MyField;
///
/// ringfield_web::export_field!(MyField, "my-field");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`. `$field_type` needs a `new()` constructor.
///
/// Host side, per frame:
///
/// ```js
/// function tick(ts) {
///   if (wasm.field_frame(ts)) requestAnimationFrame(tick);
/// }
/// ```
#[macro_export]
macro_rules! export_field {
    ($field_type:ty, $field_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::FieldRunner<$field_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::FieldRunner<$field_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.get_or_insert_with(|| {
                    console_error_panic_hook::set_once();
                    let _ = console_log::init_with_level(log::Level::Info);
                    $crate::FieldRunner::new(<$field_type>::new())
                });
                f(runner)
            })
        }

        /// Apply a JSON config override. Must be called before `field_init`.
        #[wasm_bindgen]
        pub fn field_load_config(json: &str) -> bool {
            with_runner(|r| match r.load_config(json) {
                Ok(()) => true,
                Err(err) => {
                    log::error!("{}: config rejected: {}", $field_name, err);
                    false
                }
            })
        }

        #[wasm_bindgen]
        pub fn field_init(width: f32, height: f32) {
            with_runner(|r| r.init(width, height));
            log::info!("{}: initialized", $field_name);
        }

        /// Run one frame. Returns whether the host should request another.
        #[wasm_bindgen]
        pub fn field_frame(timestamp_ms: f64) -> bool {
            with_runner(|r| r.frame(timestamp_ms))
        }

        #[wasm_bindgen]
        pub fn field_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn field_stop() {
            with_runner(|r| r.stop());
            log::info!("{}: stopped", $field_name);
        }

        // ---- Frame buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        /// Copy of the current frame buffer, for hosts that do not read
        /// wasm memory directly.
        #[wasm_bindgen]
        pub fn get_frame_copy() -> $crate::js_sys::Float32Array {
            with_runner(|r| $crate::js_sys::Float32Array::from(r.frame_floats()))
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_frame_count() -> u32 {
            with_runner(|r| r.frame_count())
        }

        #[wasm_bindgen]
        pub fn get_pair_count() -> u32 {
            with_runner(|r| r.pair_count())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }
    };
}
