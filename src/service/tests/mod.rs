mod saved_query_service;
