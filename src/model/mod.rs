/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Remote endpoints and their routes
pub mod endpoint;
/// HTTP transport and URL construction
pub mod http;
/// Request parameter models
pub mod requests;
