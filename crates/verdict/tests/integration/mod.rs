mod local_server;
