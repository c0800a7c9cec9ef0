pub mod test_curves;
