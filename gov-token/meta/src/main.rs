fn main() {
    multiversx_sc_meta_lib::cli_main::<gov_token::AbiProvider>();
}
