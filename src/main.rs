mod app;
mod app_router;
mod embedded_view;
mod pages;
mod preload;
mod skeleton;

use app::App;

const MOUNT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_ID));
    let Some(root) = root else {
        gloo::console::error!("missing mount point", MOUNT_ID);
        return;
    };
    yew::Renderer::<App>::with_root(root).render();
}
