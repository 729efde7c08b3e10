use folio_web::App;

fn main() {
    dioxus::launch(App);
}
