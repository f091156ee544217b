fn main() {
    ferreteria_storefront::run();
}
