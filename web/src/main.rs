// Chief Live Gaming - browser entry point (trunk serve / trunk build)

use chief_site::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
