#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeClientError {
    /// Alguno de los argumentos no tiene el formato esperado, por ejemplo un puerto no numerico
    ArgsFormat,
}
