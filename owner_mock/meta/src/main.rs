fn main() {
    multiversx_sc_meta_lib::cli_main::<owner_mock::AbiProvider>();
}
